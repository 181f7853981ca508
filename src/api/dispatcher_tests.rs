//! Tests for message preparation and `Dispatcher`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    ApiResponse, Dispatcher, HttpClient, HttpError, HttpRequest, HttpResponse, SendError,
    build_request, endpoint, prepare,
};
use crate::config::{Preset, field as preset_field};
use crate::message::{Message, field as message_field};

/// Mock HTTP client that returns a configurable sequence of responses.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn replying(status: http::StatusCode, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status, body.as_bytes().to_vec()))])
    }

    fn accepting() -> Self {
        Self::replying(http::StatusCode::OK, r#"{"status":1,"request":"req-1"}"#)
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

fn preset(pairs: &[(&str, &str)]) -> Preset {
    Preset::from_pairs(pairs.iter().copied()).unwrap()
}

fn credentials() -> Preset {
    preset(&[(preset_field::USER, "U1"), (preset_field::TOKEN, "T1")])
}

fn hello() -> Message {
    Message::with_body("hello").unwrap()
}

mod preparation {
    use super::*;

    #[test]
    fn auth_parameters_come_first() {
        let params = prepare(&hello(), &credentials());

        assert_eq!(
            params,
            [
                ("token", "T1".to_string()),
                ("user", "U1".to_string()),
                ("message", "hello".to_string()),
            ]
        );
    }

    #[test]
    fn api_url_is_not_a_parameter() {
        let params = prepare(&hello(), &credentials());

        assert!(params.iter().all(|(name, _)| *name != "api_url" && *name != "url"));
    }

    #[test]
    fn device_is_included_when_set() {
        let mut preset = credentials();
        preset.set(preset_field::DEVICE, "phone").unwrap();

        let params = prepare(&hello(), &preset);

        assert!(params.contains(&("device", "phone".to_string())));
    }

    #[test]
    fn empty_device_is_omitted() {
        let mut preset = credentials();
        preset.set(preset_field::DEVICE, "").unwrap();

        let params = prepare(&hello(), &preset);

        assert!(params.iter().all(|(name, _)| *name != "device"));
    }

    #[test]
    fn message_fields_are_serialized() {
        let mut message = hello();
        message.set(message_field::TITLE, "Server").unwrap();
        message.set(message_field::PRIORITY, "emergency").unwrap();
        message.set(message_field::TIMESTAMP, 1_700_000_000_i64).unwrap();

        let params = prepare(&message, &credentials());

        assert!(params.contains(&("title", "Server".to_string())));
        assert!(params.contains(&("priority", "2".to_string())));
        assert!(params.contains(&("timestamp", "1700000000".to_string())));
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let params = prepare(&hello(), &credentials());

        for name in ["title", "url", "url_title", "priority", "timestamp"] {
            assert!(params.iter().all(|(n, _)| *n != name), "{name} should be omitted");
        }
    }
}

mod requests {
    use super::*;

    #[test]
    fn default_endpoint() {
        let url = endpoint(&credentials()).unwrap();

        assert_eq!(url.as_str(), "https://api.pushover.net/1/messages.json");
    }

    #[test]
    fn unsupported_scheme_fails() {
        let preset = preset(&[(preset_field::URL, "ftp://example.com/messages")]);

        assert!(matches!(
            endpoint(&preset),
            Err(SendError::UnsupportedScheme(ref scheme)) if scheme == "ftp"
        ));
    }

    #[test]
    fn unparsable_url_fails() {
        let preset = preset(&[(preset_field::URL, "not a url")]);

        assert!(matches!(
            endpoint(&preset),
            Err(SendError::InvalidUrl { ref url, .. }) if url == "not a url"
        ));
    }

    #[test]
    fn empty_url_fails() {
        let preset = preset(&[(preset_field::URL, "")]);

        assert!(matches!(endpoint(&preset), Err(SendError::InvalidUrl { .. })));
    }

    #[test]
    fn request_is_form_encoded_post() {
        let req = build_request(&credentials(), &hello()).unwrap();

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(req.body_text(), Some("token=T1&user=U1&message=hello"));
    }

    #[test]
    fn body_escapes_special_characters() {
        let message = Message::with_body("50% done & counting").unwrap();

        let req = build_request(&credentials(), &message).unwrap();

        assert_eq!(
            req.body_text(),
            Some("token=T1&user=U1&message=50%25+done+%26+counting")
        );
    }
}

mod sending {
    use super::*;

    #[tokio::test]
    async fn sends_single_request_to_endpoint() {
        let dispatcher = Dispatcher::new(MockClient::accepting());

        let response = dispatcher.send(&credentials(), &hello()).await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.request.as_deref(), Some("req-1"));
        assert_eq!(dispatcher.client().calls(), 1);

        let requests = dispatcher.client().captured_requests();
        assert_eq!(
            requests[0].url.as_str(),
            "https://api.pushover.net/1/messages.json"
        );
        assert_eq!(
            requests[0].body_text(),
            Some("token=T1&user=U1&message=hello")
        );
    }

    #[tokio::test]
    async fn custom_endpoint_is_used() {
        let mut preset = credentials();
        preset
            .set(preset_field::URL, "http://localhost:8080/1/messages.json")
            .unwrap();
        let dispatcher = Dispatcher::new(MockClient::accepting());

        dispatcher.send(&preset, &hello()).await.unwrap();

        let requests = dispatcher.client().captured_requests();
        assert_eq!(
            requests[0].url.as_str(),
            "http://localhost:8080/1/messages.json"
        );
    }

    #[tokio::test]
    async fn rejection_is_returned_not_raised() {
        let client = MockClient::replying(
            http::StatusCode::BAD_REQUEST,
            r#"{"token":"invalid","errors":["application token is invalid"],"status":0,"request":"req-2"}"#,
        );
        let dispatcher = Dispatcher::new(client);

        let response = dispatcher.send(&credentials(), &hello()).await.unwrap();

        assert!(!response.is_success());
        assert_eq!(response.errors, ["application token is invalid"]);
    }

    #[tokio::test]
    async fn malformed_body_fails_with_status() {
        let client = MockClient::replying(http::StatusCode::BAD_GATEWAY, "<html>oops</html>");
        let dispatcher = Dispatcher::new(client);

        let result = dispatcher.send(&credentials(), &hello()).await;

        assert!(matches!(
            result,
            Err(SendError::MalformedResponse { status, .. }) if status == http::StatusCode::BAD_GATEWAY
        ));
    }

    #[tokio::test]
    async fn transport_error_is_propagated() {
        let dispatcher = Dispatcher::new(MockClient::new(vec![Err(HttpError::Timeout)]));

        let result = dispatcher.send(&credentials(), &hello()).await;

        assert!(matches!(result, Err(SendError::Http(HttpError::Timeout))));
        assert_eq!(dispatcher.client().calls(), 1);
    }

    #[tokio::test]
    async fn invalid_endpoint_sends_nothing() {
        let mut preset = credentials();
        preset.set(preset_field::URL, "ftp://example.com").unwrap();
        let dispatcher = Dispatcher::new(MockClient::accepting());

        let result = dispatcher.send(&preset, &hello()).await;

        assert!(matches!(result, Err(SendError::UnsupportedScheme(_))));
        assert_eq!(dispatcher.client().calls(), 0);
    }

    #[tokio::test]
    async fn response_keeps_unknown_fields() {
        let client = MockClient::replying(
            http::StatusCode::OK,
            r#"{"status":1,"request":"req-3","receipt":"r-1"}"#,
        );
        let dispatcher = Dispatcher::new(client);

        let response: ApiResponse = dispatcher.send(&credentials(), &hello()).await.unwrap();

        assert_eq!(
            response.extra.get("receipt"),
            Some(&serde_json::Value::from("r-1"))
        );
    }
}
