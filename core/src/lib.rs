//! URL building and single-shot HTTP dispatch.
//!
//! # Overview
//! Two small pieces that meet only at a string: `Address` renders canonical
//! URLs (scheme, host, optional credentials, path, sorted query), and
//! `Dispatcher` sends one HTTP request through a `Client` and hands back the
//! raw response.
//!
//! # Design
//! - `Address` is immutable. Every call derives a fresh `Endpoint`, so one
//!   address can be reused for many URLs.
//! - Query arguments are typed (`QueryValue`) and rendered to strings only
//!   when the URL is built. Keys are sorted and form-encoded.
//! - The transport is the `Client` trait. `UreqClient` is the default and is
//!   configured explicitly through `Config` (5 second timeout by default).
//! - Method, URL and header problems are reported before the client is
//!   called. Transport errors pass through untouched.

pub mod address;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod types;

pub use address::{Address, Credentials, Endpoint};
pub use client::{Client, UreqClient};
pub use config::Config;
pub use dispatch::{Dispatcher, Params};
pub use error::RequestError;
pub use http::{Body, HttpRequest, HttpResponse};
pub use types::QueryValue;
