//! Unified metadata provider abstraction layer
//!
//! This crate provides a standardized interface for fetching title
//! metadata from different data sources (TMDb, OMDb) and for merging
//! their partial results into one canonical record.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            MetadataProvider trait            │
//! │  fetch(movie_id, title, year) -> Partial     │
//! └──────────────────────────────────────────────┘
//!              △                    △
//!              │                    │
//!    ┌─────────┴──────┐   ┌─────────┴──────┐
//!    │  TmdbProvider  │   │  OmdbProvider  │
//!    └────────────────┘   └────────────────┘
//!
//!    merge(&[PartialMetadata]) -> CanonicalMetadata
//! ```
//!
//! Each provider returns a sparse [`PartialMetadata`]; absence means
//! "this provider has no opinion". [`merge`] folds the partials in
//! provider-priority order into a [`CanonicalMetadata`].

mod adapters;
mod error;
mod lookup;
mod merge;
mod models;
mod provider;
mod strings;

pub use adapters::{OmdbProvider, TmdbProvider};
pub use error::ProviderError;
pub use lookup::{GenreMap, LanguageMap};
pub use merge::{merge, CanonicalMetadata, MergeError};
pub use models::{ActorRef, Gender, PartialMetadata};
pub use provider::MetadataProvider;
pub use strings::{join_comma_list, split_comma_list};
