//! HTTP request and response values exchanged with a `Client`.
//!
//! # Design
//! `HttpRequest` is what the dispatcher hands to a transport after every
//! construction check has passed, so a transport only deals with network
//! failures. `HttpResponse` is the opaque handle coming back: status,
//! headers, and a body stream the caller reads and drops.
//!
//! Method, URI and header types come from the `http` crate as re-exported by
//! `ureq`, keeping validation identical on both sides of the `Client` seam.

use std::fmt;
use std::io::Read;

pub use ureq::http::{HeaderMap, HeaderName, HeaderValue, Method, Uri};

/// Streaming request or response body.
pub type Body = Box<dyn Read + Send>;

/// A validated, ready-to-send HTTP request.
pub struct HttpRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Option<Body>,
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| ".."))
            .finish()
    }
}

/// The transport's response. The body has not been read yet.
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl HttpResponse {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
