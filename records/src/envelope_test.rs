use super::*;
use serde_json::json;

#[derive(Debug, PartialEq, Deserialize)]
struct Items {
    items: Vec<u32>,
}

#[test]
fn interpret_returns_payload_on_success() {
    let body = json!({ "success": true, "data": { "items": [1, 2] } }).to_string();
    let items: Items = interpret(200, &body).unwrap();
    assert_eq!(items.items, vec![1, 2]);
}

#[test]
fn interpret_empty_collection_is_not_an_error() {
    let body = json!({ "success": true, "data": { "items": [] } }).to_string();
    let items: Items = interpret(200, &body).unwrap();
    assert!(items.items.is_empty());
}

#[test]
fn interpret_server_error_without_body_uses_status_message() {
    let err = interpret::<Items>(500, "<html>oops</html>").unwrap_err();
    assert_eq!(
        err,
        FetchError::Status {
            status: 500,
            message: "request failed: 500".to_owned()
        }
    );
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn interpret_non_success_status_prefers_envelope_message() {
    let body = json!({ "success": false, "message": "Token expired" }).to_string();
    let err = interpret::<Items>(401, &body).unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Token expired");
}

#[test]
fn interpret_rejected_envelope_carries_message() {
    let body = json!({ "success": false, "message": "Category disabled" }).to_string();
    let err = interpret::<Items>(200, &body).unwrap_err();
    assert_eq!(err, FetchError::Rejected("Category disabled".to_owned()));
}

#[test]
fn interpret_rejected_envelope_without_message_uses_fallback() {
    let body = json!({ "success": false, "message": "  " }).to_string();
    let err = interpret::<Items>(200, &body).unwrap_err();
    assert_eq!(err, FetchError::Rejected(GENERIC_FAILURE_MESSAGE.to_owned()));
}

#[test]
fn interpret_rejected_envelope_ignores_unexpected_data_shape() {
    let body = json!({ "success": false, "data": "nope", "message": "Denied" }).to_string();
    let err = interpret::<Items>(200, &body).unwrap_err();
    assert_eq!(err, FetchError::Rejected("Denied".to_owned()));
}

#[test]
fn interpret_success_without_data_is_decode_error() {
    let body = json!({ "success": true }).to_string();
    let err = interpret::<Items>(200, &body).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn interpret_malformed_body_is_decode_error() {
    let err = interpret::<Items>(200, "not json").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert!(err.to_string().starts_with("unexpected response:"));
}

#[test]
fn transport_error_is_not_unauthorized() {
    let err = FetchError::Transport("connection refused".to_owned());
    assert_eq!(err.status(), None);
    assert!(!err.is_unauthorized());
    assert_eq!(err.to_string(), "network error: connection refused");
}
