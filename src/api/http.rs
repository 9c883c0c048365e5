//! HTTP backend abstraction for the character API.
//!
//! The client is generic over an [`HttpBackend`] so tests can swap the
//! network for canned responses. The production backend is a thin
//! wrapper around `reqwest` with no retries.

use crate::api::config::ClientConfig;
use crate::api::error::{FetchError, FetchResult};
use async_trait::async_trait;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Something that can GET a URL and hand back the raw body.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Perform a single GET and return the response body.
    ///
    /// The status code is not inspected; the caller decides what the
    /// body means.
    async fn get(&self, url: &Url) -> FetchResult<Vec<u8>>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ClientConfig) -> FetchResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::ClientBuild)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url) -> FetchResult<Vec<u8>> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::FakeBackend;
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_reqwest_backend_creation() {
        assert!(ReqwestBackend::new(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_reqwest_backend_with_timeout() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(10));
        assert!(ReqwestBackend::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_reqwest_backend_connection_refused() {
        // Bind then drop to get a port nothing is listening on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let backend = ReqwestBackend::new(&ClientConfig::default()).unwrap();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/api/character")).unwrap();

        let result = backend.get(&url).await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_body() {
        let backend = FakeBackend::new().with_json("character", json!({"results": []}));
        let url = Url::parse("https://example.com/api/character").unwrap();

        let body = backend.get(&url).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value, json!({"results": []}));
        assert_eq!(backend.requests(), vec![url.to_string()]);
    }

    #[tokio::test]
    async fn test_fake_backend_default_body() {
        let backend = FakeBackend::new().with_default_body(b"fallback".to_vec());
        let url = Url::parse("https://example.com/anything").unwrap();

        assert_eq!(backend.get(&url).await.unwrap(), b"fallback".to_vec());
    }
}
