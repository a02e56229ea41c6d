//! Metadata provider adapters for different data sources

mod omdb_adapter;
mod tmdb_adapter;

pub use omdb_adapter::OmdbProvider;
pub use tmdb_adapter::TmdbProvider;
