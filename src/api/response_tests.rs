//! Tests for `ApiResponse`.

use super::ApiResponse;

#[test]
fn parses_accepted_response() {
    let response = ApiResponse::from_slice(br#"{"status":1,"request":"req-1"}"#).unwrap();

    assert!(response.is_success());
    assert_eq!(response.request.as_deref(), Some("req-1"));
    assert!(response.errors.is_empty());
    assert!(response.extra.is_empty());
}

#[test]
fn parses_rejected_response() {
    let body = br#"{"user":"invalid","errors":["user identifier is invalid"],"status":0,"request":"req-2"}"#;

    let response = ApiResponse::from_slice(body).unwrap();

    assert!(!response.is_success());
    assert_eq!(response.errors, ["user identifier is invalid"]);
    assert_eq!(
        response.extra.get("user"),
        Some(&serde_json::Value::from("invalid"))
    );
}

#[test]
fn missing_status_is_not_success() {
    let response = ApiResponse::from_slice(b"{}").unwrap();

    assert_eq!(response.status, 0);
    assert!(!response.is_success());
}

#[test]
fn other_status_values_are_not_success() {
    let response = ApiResponse::from_slice(br#"{"status":2}"#).unwrap();

    assert!(!response.is_success());
}

#[test]
fn rejects_non_json() {
    assert!(ApiResponse::from_slice(b"<html>Bad Gateway</html>").is_err());
    assert!(ApiResponse::from_slice(b"").is_err());
}

#[test]
fn rejects_wrong_shape() {
    assert!(ApiResponse::from_slice(b"[1, 2]").is_err());
    assert!(ApiResponse::from_slice(br#"{"status":"ok"}"#).is_err());
}

#[test]
fn serializes_back_with_extra_fields() {
    let body = br#"{"status":0,"errors":["bad"],"token":"invalid"}"#;
    let response = ApiResponse::from_slice(body).unwrap();

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"status": 0, "errors": ["bad"], "token": "invalid"})
    );
}
