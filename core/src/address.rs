//! Structured URL builder for HTTP and DSN-style addresses.
//!
//! # Design
//! `Address` holds only scheme, host and optional credentials. Path and query
//! parameters belong to a per-call `Endpoint` that borrows the address, so a
//! single `Address` can render any number of URLs without carrying state from
//! one call to the next.
//!
//! Rendering never fails. An empty scheme or host still produces an
//! assembled string; validating it is left to whoever consumes the URL.

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::types::QueryValue;

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Characters escaped in the `user:password` segment.
const USERINFO: &AsciiSet = &UNRESERVED
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Characters escaped in the path segment.
const PATH: &AsciiSet = &USERINFO.remove(b'/').remove(b':').remove(b'@');

/// Username and optional password embedded in the URL's userinfo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", utf8_percent_encode(&self.username, USERINFO))?;
        if let Some(password) = &self.password {
            write!(f, ":{}", utf8_percent_encode(password, USERINFO))?;
        }
        Ok(())
    }
}

/// Scheme, host and optional credentials shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    scheme: String,
    host: String,
    credentials: Option<Credentials>,
}

impl Address {
    pub fn new(scheme: &str, host: &str) -> Self {
        Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            credentials: None,
        }
    }

    /// Build an address from zero, one or two userinfo strings.
    ///
    /// One string is a username with an empty password (`user:@host`), two
    /// are username and password. Any other count yields no credentials.
    pub fn from_userinfo(scheme: &str, host: &str, userinfo: &[&str]) -> Self {
        let credentials = match userinfo {
            [user] => Some(Credentials {
                username: user.to_string(),
                password: Some(String::new()),
            }),
            [user, password] => Some(Credentials {
                username: user.to_string(),
                password: Some(password.to_string()),
            }),
            _ => None,
        };
        Self {
            credentials,
            ..Self::new(scheme, host)
        }
    }

    /// Attach a username without a password (`user@host`).
    pub fn with_user(mut self, username: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: None,
        });
        self
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: Some(password.to_string()),
        });
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Start a fresh endpoint at `path` with no query parameters.
    pub fn endpoint(&self, path: &str) -> Endpoint<'_> {
        Endpoint {
            address: self,
            path: path.to_string(),
            query: BTreeMap::new(),
        }
    }

    /// Render the URL for `path` with alternating key/value `args`.
    ///
    /// See [`Endpoint::args`] for how the arguments are paired.
    pub fn build(&self, path: &str, args: &[QueryValue]) -> String {
        self.endpoint(path).args(args).to_string()
    }
}

/// A path plus query parameters derived from an `Address`.
#[derive(Debug, Clone)]
pub struct Endpoint<'a> {
    address: &'a Address,
    path: String,
    query: BTreeMap<String, String>,
}

impl<'a> Endpoint<'a> {
    /// Consume `args` two at a time as `(key, value)`.
    ///
    /// A trailing unpaired argument is dropped. Repeated keys keep the last
    /// value.
    pub fn args(mut self, args: &[QueryValue]) -> Self {
        for pair in args.chunks_exact(2) {
            self.query.insert(pair[0].to_string(), pair[1].to_string());
        }
        self
    }

    pub fn param(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key.to_string(), value.into().to_string());
        self
    }

    pub fn address(&self) -> &'a Address {
        self.address
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Encoded query in ascending key order, or `None` when there are no
    /// parameters.
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", query_escape(key), query_escape(value)))
            .collect();
        Some(pairs.join("&"))
    }

    /// Parse the rendered URL, for callers that want its components.
    ///
    /// Fails when the rendered string is not a valid URL, for example
    /// `http://` with an empty host.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }
}

/// Escape a query key or value: unreserved characters stay, space becomes
/// `+`, everything else is `%XX`.
fn query_escape(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED)
        .map(|chunk| if chunk == "%20" { "+" } else { chunk })
        .collect()
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.address.scheme)?;
        if let Some(credentials) = &self.address.credentials {
            write!(f, "{credentials}@")?;
        }
        f.write_str(&self.address.host)?;
        if !self.path.is_empty() && !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        write!(f, "{}", utf8_percent_encode(&self.path, PATH))?;
        if let Some(query) = self.query_string() {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}
