//! Client for the character listing endpoint.

use crate::api::config::ClientConfig;
use crate::api::error::FetchResult;
use crate::api::http::{HttpBackend, ReqwestBackend};
use crate::state::data::{Character, CharacterListResponse};
use url::Url;

/// Default client using the reqwest HTTP backend.
pub type DefaultCharacterClient = CharacterClient<ReqwestBackend>;

/// Client for the character API.
///
/// Generic over an HTTP backend so tests can run without the network.
/// Nothing is cached: every call goes to the backend.
pub struct CharacterClient<B: HttpBackend> {
    backend: B,
    config: ClientConfig,
}

impl DefaultCharacterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> CharacterClient<B> {
    /// Create a client around an existing backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: ClientConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Fetch the first page of characters, in API order.
    pub async fn fetch_characters(&self) -> FetchResult<Vec<Character>> {
        let url = Url::parse(&self.config.endpoint)?;
        let body = self.backend.get(&url).await?;
        let response: CharacterListResponse = serde_json::from_slice(&body)?;
        Ok(response.results)
    }

    /// Fetch the raw bytes of a character's image.
    pub async fn fetch_image(&self, image_url: &str) -> FetchResult<Vec<u8>> {
        let url = Url::parse(image_url)?;
        self.backend.get(&url).await
    }
}
