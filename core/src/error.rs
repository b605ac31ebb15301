//! Error types for request dispatch.
//!
//! # Design
//! Construction failures (method, URL, headers) get their own variants and
//! are raised before a `Client` is ever called. Anything the transport
//! reports is carried unchanged in `Transport` and reachable through
//! `source()`. The address builder has no error type at all.

use std::error::Error as StdError;

/// Errors returned by `Dispatcher::execute` and `Client` implementations.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The method is not a valid HTTP token.
    #[error("invalid method: {0:?}")]
    InvalidMethod(String),

    /// The URL could not be parsed or lacks a scheme or host.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A header name or value is not valid on the wire.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The transport failed to complete the exchange.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

impl RequestError {
    pub fn transport(err: impl StdError + Send + Sync + 'static) -> Self {
        RequestError::Transport(Box::new(err))
    }
}
