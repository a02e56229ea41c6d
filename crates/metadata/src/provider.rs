//! Metadata provider trait definition

use async_trait::async_trait;

use crate::{PartialMetadata, ProviderError};

/// Unified metadata provider trait
///
/// This trait defines a standard interface for fetching title metadata
/// from different data sources (TMDb, OMDb). Implementations are
/// stateless, independent and know nothing about each other; the fan-out
/// coordinator invokes all of them concurrently for one crawl.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch this provider's partial record for one title.
    ///
    /// Single attempt, fail fast: implementations do not retry and own
    /// their own request deadline. Returns `NotFound` when the provider
    /// has no matching title, `Upstream` on a non-success status or a
    /// malformed payload, `Timeout` on deadline exceedance.
    async fn fetch(
        &self,
        movie_id: Option<i64>,
        title: &str,
        year: Option<i32>,
    ) -> Result<PartialMetadata, ProviderError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
