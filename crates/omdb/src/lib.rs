//! OMDb API client
//!
//! OMDb is a single-endpoint API: one GET with the title as a query
//! parameter returns the whole record. Missing fields come back as the
//! literal string "N/A" and lookup misses as `"Response": "False"`; both
//! are normalized here so callers only see `Option`s and typed errors.

mod client;
mod error;

pub mod models;

pub use client::OmdbClient;
pub use error::OmdbError;
pub use models::OmdbTitle;

pub type Result<T> = std::result::Result<T, OmdbError>;
