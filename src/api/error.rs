//! Error types for character API operations.

use thiserror::Error;

/// Result type alias for API operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while fetching and decoding data from the API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (DNS, refused connection, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client itself could not be built.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_error_message() {
        let error: FetchError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(error, FetchError::InvalidUrl(_)));
        assert!(error.to_string().starts_with("Invalid URL"));
    }

    #[test]
    fn test_decode_error_message() {
        let error: FetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(error, FetchError::Decode(_)));
        assert!(error.to_string().contains("decode"));
    }
}
