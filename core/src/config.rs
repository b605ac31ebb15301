//! Transport configuration.

use std::time::Duration;

/// Overall timeout applied to every request sent through the default client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings used to build the default `UreqClient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Upper bound for one whole request, as enforced by the transport.
    pub timeout: Duration,
}

impl Config {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
