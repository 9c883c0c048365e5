//! Configuration for the character API client.

use std::time::Duration;

/// The only endpoint the application talks to (first page of characters).
pub const CHARACTERS_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// Configuration for the character client.
///
/// The application always runs with the defaults; the builder methods
/// exist so tests can point the client elsewhere.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the character listing
    pub(crate) endpoint: String,
    /// Request timeout (`None` keeps reqwest's default)
    pub(crate) timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: CHARACTERS_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character listing URL.
    #[must_use]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an explicit request timeout.
    #[must_use]
    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new();
        assert_eq!(config.endpoint, "https://rickandmortyapi.com/api/character");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new()
            .with_endpoint("http://127.0.0.1:8080/api/character")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.endpoint, "http://127.0.0.1:8080/api/character");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
