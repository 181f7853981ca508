//! Message API layer: HTTP abstraction and delivery.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Preparing and sending messages ([`prepare`], [`Dispatcher`])
//! - The parsed service reply ([`ApiResponse`])

mod client;
mod dispatcher;
mod error;
mod http;
mod response;

#[cfg(test)]
mod dispatcher_tests;
#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod response_tests;

pub use client::ReqwestClient;
pub use dispatcher::{Dispatcher, build_request, endpoint, prepare};
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use response::ApiResponse;
