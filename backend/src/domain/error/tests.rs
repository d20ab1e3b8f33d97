//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("who"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("no"), ErrorCode::Forbidden)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values() {
    let result = Error::invalid_request("bad").try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_absent_fields(expected_trace_id: String) {
    let plain = serde_json::to_value(Error::not_found("post not found")).expect("serialise");
    assert_eq!(
        plain,
        json!({ "code": "not_found", "message": "post not found" })
    );

    let traced = Error::invalid_request("bad")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "text" }));
    let value = serde_json::to_value(traced).expect("serialise");
    assert_eq!(value["traceId"], json!(expected_trace_id));
    assert_eq!(value["details"]["field"], json!("text"));
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let payload = json!({ "code": "forbidden", "message": "not yours" });
    let error: Error = TraceId::scope(trace_id, async move {
        serde_json::from_value(payload).expect("valid payload")
    })
    .await;

    assert_eq!(error.code(), ErrorCode::Forbidden);
    assert!(error.trace_id().is_none());
}

#[rstest]
fn deserialising_rejects_blank_messages() {
    let payload = json!({ "code": "not_found", "message": " " });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}
