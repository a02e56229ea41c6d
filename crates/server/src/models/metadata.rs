use chrono::{DateTime, NaiveDate, Utc};
use metadata::CanonicalMetadata;
use serde::Serialize;

/// Persisted canonical metadata row.
///
/// At most one row exists per `movie_id`, and at most one per
/// `search_title` when the movie id is absent.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Metadata {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub movie_id: Option<i64>,
    pub search_title: String,

    pub tmdb_id: Option<i64>,
    pub for_adult: Option<bool>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub number_of_episodes: Option<i32>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub country: Option<String>,
    pub original_language: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
}

/// Insert payload for a metadata row that has no existing counterpart.
#[derive(Debug, Clone)]
pub struct NewMetadata {
    pub movie_id: Option<i64>,
    pub search_title: String,
    pub canonical: CanonicalMetadata,
}
