//! Transport capability and its default `ureq` implementation.
//!
//! # Design
//! The dispatcher only knows the `Client` trait: hand over an `HttpRequest`,
//! get back an `HttpResponse` or an error. Connection handling, TLS,
//! redirects and timeouts all live behind that seam, which is also where
//! tests plug in a recording transport.

use tracing::debug;
use ureq::SendBody;

use crate::config::Config;
use crate::error::RequestError;
use crate::http::{HttpRequest, HttpResponse};

/// Something that can execute one HTTP request.
///
/// Implementations are shared between callers, so they must be safe to use
/// from several threads at once.
pub trait Client: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}

/// Blocking transport backed by a `ureq::Agent`.
///
/// Non-2xx statuses come back as ordinary responses; only failures to
/// complete the exchange are errors.
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Client for UreqClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let HttpRequest {
            method,
            uri,
            headers,
            mut body,
        } = request;

        let mut outgoing = ureq::http::Request::new(());
        *outgoing.method_mut() = method;
        *outgoing.uri_mut() = uri;
        *outgoing.headers_mut() = headers;

        // SendBody is invariant over its lifetime, so each arm runs its own request.
        let result = match body.as_mut() {
            Some(reader) => self.agent.run(outgoing.map(|()| SendBody::from_reader(reader))),
            None => self.agent.run(outgoing.map(|()| SendBody::none())),
        };
        let response = result.map_err(|err| {
            debug!(error = %err, "ureq transport failed");
            RequestError::transport(err)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.into_body().into_reader();

        Ok(HttpResponse {
            status,
            headers,
            body: Box::new(body),
        })
    }
}
