//! Error types for metadata provider operations

use thiserror::Error;

/// Per-provider fetch failure. All variants are non-fatal for a crawl:
/// the coordinator logs them and proceeds with the remaining providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no match for '{0}'")]
    NotFound(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("request timed out")]
    Timeout,
}

impl From<tmdb::TmdbError> for ProviderError {
    fn from(err: tmdb::TmdbError) -> Self {
        match err {
            tmdb::TmdbError::NotFound(title) => ProviderError::NotFound(title),
            tmdb::TmdbError::Timeout => ProviderError::Timeout,
            other => ProviderError::Upstream(other.to_string()),
        }
    }
}

impl From<omdb::OmdbError> for ProviderError {
    fn from(err: omdb::OmdbError) -> Self {
        match err {
            omdb::OmdbError::NotFound(title) => ProviderError::NotFound(title),
            omdb::OmdbError::Timeout => ProviderError::Timeout,
            other => ProviderError::Upstream(other.to_string()),
        }
    }
}
