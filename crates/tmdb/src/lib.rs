//! TMDb API client
//!
//! Covers the endpoints needed for a TV title crawl:
//! - `/search/tv` to resolve a TMDb id from a title + year
//! - `/tv/{id}` for general detail
//! - `/tv/{id}/aggregate_credits` for the cast list
//! - `/tv/{id}/images` for posters and backdrops

mod client;
mod credits;
mod error;
mod images;
mod search;
mod tv;

pub mod models;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use models::{
    AggregateCredits, CastMember, CastRole, Image, TvDetail, TvGenre, TvImages, TvSearchResponse,
    TvSearchResult,
};

pub type Result<T> = std::result::Result<T, TmdbError>;
