//! Tests for HTTP request/response types.

use super::{HttpError, HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://api.example.com/1/messages.json").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PUT, test_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let req = HttpRequest::post(test_url());

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::post(test_url()).with_body(b"message=hi".to_vec());

        assert_eq!(req.body, Some(b"message=hi".to_vec()));
        assert_eq!(req.body_text(), Some("message=hi"));
    }

    #[test]
    fn body_text_is_none_without_body() {
        assert!(HttpRequest::post(test_url()).body_text().is_none());
    }

    #[test]
    fn body_text_is_none_for_invalid_utf8() {
        let req = HttpRequest::post(test_url()).with_body(vec![0xFF, 0xFE]);

        assert!(req.body_text().is_none());
    }

    #[test]
    fn with_header_appends_values() {
        let req = HttpRequest::post(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn ok_creates_200_response() {
        let resp = HttpResponse::ok(r#"{"status":1}"#);

        assert_eq!(resp.status, http::StatusCode::OK);
        assert_eq!(resp.body, br#"{"status":1}"#);
    }

    #[test]
    fn new_keeps_status_and_body() {
        let resp = HttpResponse::new(http::StatusCode::BAD_GATEWAY, b"oops".to_vec());

        assert_eq!(resp.status, http::StatusCode::BAD_GATEWAY);
        assert_eq!(resp.body, b"oops");
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = HttpError::Connection(Box::new(io));

        assert!(error.to_string().contains("refused"));
        assert!(error.source().is_some());
    }

    #[test]
    fn timeout_display() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn invalid_url_display() {
        let error = HttpError::InvalidUrl("bad".to_string());

        assert_eq!(error.to_string(), "Invalid URL: bad");
    }
}
