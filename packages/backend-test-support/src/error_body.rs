//! Assertions on the backend's JSON error contract.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::WWW_AUTHENTICATE;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body, so this crate does not depend
/// on backend types.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that a response is an error with the expected status, code and
/// client-facing message.
///
/// Also checks that the `x-trace-id` header matches the body and that only
/// 401 responses carry a `WWW-Authenticate: Bearer` challenge.
pub async fn assert_error_body<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_error: &str,
) -> ErrorBodyLike
where
    B: MessageBody,
{
    assert_eq!(resp.status(), expected_status);

    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;
    let parsed: ErrorBodyLike =
        serde_json::from_slice(&body).expect("Response body should be a JSON error body");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert_eq!(
        parsed.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    let challenge = headers.get(WWW_AUTHENTICATE).and_then(|v| v.to_str().ok());
    if expected_status == StatusCode::UNAUTHORIZED {
        assert_eq!(challenge, Some("Bearer"));
    } else {
        assert_eq!(challenge, None);
    }

    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.error, expected_error);
    parsed
}
