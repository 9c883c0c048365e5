/// Character API access
///
/// This module handles:
/// - Building the request URL and issuing the GET (client.rs)
/// - The swappable HTTP backend (http.rs)
/// - Client configuration (config.rs)
/// - Error types (error.rs)

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::{CharacterClient, DefaultCharacterClient};
pub use config::ClientConfig;
pub use error::FetchError;
