//! Message delivery: payload preparation and the single POST.

use http::HeaderValue;
use http::header::CONTENT_TYPE;
use url::Url;

use crate::config::{Preset, field as preset_field};
use crate::message::Message;

use super::{ApiResponse, HttpClient, HttpRequest, SendError};

/// Wire parameter names of the preset fields sent with every message.
/// The API URL is the destination, not a parameter.
const PRESET_PARAMS: [(&str, &str); 3] = [
    (preset_field::TOKEN, "token"),
    (preset_field::USER, "user"),
    (preset_field::DEVICE, "device"),
];

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Builds the wire parameters for a message.
///
/// Contains the preset's token, user and (if non-empty) device, followed by
/// every non-empty message field in serialized form.
#[must_use]
pub fn prepare(message: &Message, preset: &Preset) -> Vec<(&'static str, String)> {
    let mut auth = preset.to_dict();
    let mut params: Vec<(&'static str, String)> = PRESET_PARAMS
        .into_iter()
        .filter_map(|(field, param)| auth.shift_remove(field).map(|value| (param, value)))
        .collect();
    params.extend(message.to_dict());
    params
}

/// Parses the preset's API URL and checks its scheme.
///
/// # Errors
///
/// - [`SendError::InvalidUrl`] if the URL is missing or cannot be parsed
/// - [`SendError::UnsupportedScheme`] if the scheme is not `http` or `https`
pub fn endpoint(preset: &Preset) -> Result<Url, SendError> {
    let raw = preset.api_url().unwrap_or_default();
    let url = Url::parse(&raw).map_err(|e| SendError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SendError::UnsupportedScheme(other.to_string())),
    }
}

/// Builds the POST request for a message.
///
/// # Errors
///
/// Returns an error if the preset's API URL is invalid or not http(s).
pub fn build_request(preset: &Preset, message: &Message) -> Result<HttpRequest, SendError> {
    let url = endpoint(preset)?;
    let params = prepare(message, preset);
    tracing::debug!(
        "sending to {url}: {:?}",
        params.iter().map(|(k, _)| *k).collect::<Vec<_>>()
    );

    Ok(HttpRequest::post(url)
        .with_header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
        .with_body(encode(&params)))
}

/// Encodes parameters as an `application/x-www-form-urlencoded` body.
fn encode(params: &[(&str, String)]) -> Vec<u8> {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
        .into_bytes()
}

/// Sends messages to the API endpoint of a preset.
///
/// Each call to [`send`](Self::send) issues exactly one request; there are
/// no retries.
///
/// # Example
///
/// ```no_run
/// use pushover::api::{Dispatcher, ReqwestClient};
/// use pushover::config::Preset;
/// use pushover::message::Message;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let preset = Preset::from_dict([("api_user", "u123"), ("api_token", "a456")])?;
/// let message = Message::with_body("backup finished")?;
///
/// let response = Dispatcher::new(ReqwestClient::new()).send(&preset, &message).await?;
/// assert!(response.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<H> {
    client: H,
}

impl<H> Dispatcher<H> {
    /// Creates a dispatcher using the given HTTP client.
    #[must_use]
    pub const fn new(client: H) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> Dispatcher<H> {
    /// Sends a message and returns the parsed response.
    ///
    /// The response is returned whatever its `status`; a rejected message is
    /// not an error here.
    ///
    /// # Errors
    ///
    /// - [`SendError::InvalidUrl`] / [`SendError::UnsupportedScheme`] for a bad API URL
    /// - [`SendError::Http`] if the request fails at the transport level
    /// - [`SendError::MalformedResponse`] if the body is not valid JSON
    pub async fn send(&self, preset: &Preset, message: &Message) -> Result<ApiResponse, SendError> {
        let request = build_request(preset, message)?;
        let response = self.client.request(request).await?;
        tracing::debug!("response status: {}", response.status);

        let parsed = ApiResponse::from_slice(&response.body).map_err(|source| {
            SendError::MalformedResponse {
                status: response.status,
                source,
            }
        })?;
        tracing::debug!("response: {parsed:?}");
        Ok(parsed)
    }
}
