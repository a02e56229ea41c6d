use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TMDb API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("Invalid TMDb response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("TMDb has no match for '{0}'")]
    NotFound(String),

    #[error("TMDb request timed out")]
    Timeout,
}

impl TmdbError {
    /// Classify a transport error, keeping deadline exceedance distinct.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TmdbError::Timeout
        } else {
            TmdbError::Http(err)
        }
    }
}
