use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One crawl request as delivered by the ingress transport.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlRequest {
    pub movie_id: Option<i64>,
    pub title: String,
    pub release_year: Option<i32>,
    /// Re-crawl even when the title already has metadata
    #[serde(default)]
    pub refresh: bool,
}

/// Acknowledgement returned to the ingress caller; processing is
/// asynchronous.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlAccepted {
    pub message: String,
    pub status: String,
    pub requested_at: DateTime<Utc>,
}

/// Compact result event published downstream after persistence.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlResultEvent {
    pub movie_id: Option<i64>,
    pub metadata_id: i64,
    pub number_of_episodes: Option<i32>,
    pub vote_average: Option<f64>,
}
