use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info";

/// Install the global subscriber.
///
/// JSON to stdout by default; `BACKEND_LOG_FORMAT=pretty` switches to a
/// human-readable format for local runs. `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let pretty = std::env::var("BACKEND_LOG_FORMAT").is_ok_and(|format| format == "pretty");

    let registry = tracing_subscriber::registry().with(env_filter);

    if pretty {
        registry.with(fmt::layer().with_target(false)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}
