//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest, "invalid_request")]
#[case(Error::internal("boom"), ErrorCode::InternalError, "internal_error")]
fn constructors_set_code(#[case] err: Error, #[case] code: ErrorCode, #[case] wire: &str) {
    assert_eq!(err.code(), code);
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(value["code"], wire);
}

#[test]
fn serialises_camel_case_and_omits_absent_fields() {
    let err = Error::invalid_request("bad").with_trace_id("abc");

    let value = serde_json::to_value(&err).expect("serialise error");

    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "bad", "traceId": "abc" })
    );
}

#[test]
fn round_trips_details() {
    let err = Error::invalid_request("bad").with_details(json!({ "field": "gender" }));

    let decoded: Error =
        serde_json::from_value(serde_json::to_value(&err).expect("serialise")).expect("decode");

    assert_eq!(decoded, err);
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let id = TraceId::generate();

    let err = TraceId::scope(id, async { Error::internal("boom") }).await;

    assert_eq!(err.trace_id(), Some(id.to_string().as_str()));
}

#[test]
fn no_trace_id_outside_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}
