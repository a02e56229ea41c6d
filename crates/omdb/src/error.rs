use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OMDb API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("Invalid OMDb response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("OMDb has no match for '{0}'")]
    NotFound(String),

    #[error("OMDb request timed out")]
    Timeout,
}

impl OmdbError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OmdbError::Timeout
        } else {
            OmdbError::Http(err)
        }
    }
}
