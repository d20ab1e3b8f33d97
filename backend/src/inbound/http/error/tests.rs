//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn response_payload(response: HttpResponse) -> Error {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace(expected_trace_id: String) {
    let error = Error::internal("connection string leaked")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "secret": "x" }));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));

    let payload = response_payload(response).await;
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("cannot follow yourself")
        .with_details(json!({ "field": "following", "code": "self_follow" }));

    let response = ResponseError::error_response(&error);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let payload = response_payload(response).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "cannot follow yourself");
    assert_eq!(
        payload.details(),
        Some(&json!({ "field": "following", "code": "self_follow" }))
    );
}

#[rstest]
#[actix_web::test]
async fn json_payload_errors_become_invalid_requests() {
    let req = TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let payload = response_payload(response).await;
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        payload.details().and_then(|d| d.get("code")),
        Some(&json!("invalid_json"))
    );
}
