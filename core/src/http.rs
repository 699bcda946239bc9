//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the network;
//! the host supplies a `Transport` implementation that executes the actual
//! I/O. Unit tests drive the controller with an in-memory transport and the
//! real host plugs in an HTTP agent.
//!
//! All fields use owned types (`String`, `Vec`) so values move freely across
//! the seam.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, built by `TodoClient::build_*`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, consumed by
/// `TodoClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The I/O seam between the deterministic core and the host.
///
/// Implementations perform one HTTP round-trip. A non-2xx status is not an
/// error at this layer — it must come back as an `HttpResponse` so the core
/// can interpret it; `Err` is reserved for failures of the transport itself.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
