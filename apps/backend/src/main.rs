use actix_web::{web, App, HttpServer};
use resume_backend::config::app::Config;
use resume_backend::middleware::request_trace::RequestTrace;
use resume_backend::middleware::structured_logger::StructuredLogger;
use resume_backend::middleware::trace_span::TraceSpan;
use resume_backend::routes;
use resume_backend::state::app_state::AppState;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "starting resume centre backend");

    // The secret is fixed for the life of the process
    let data = web::Data::new(AppState::new(config.security()));

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
