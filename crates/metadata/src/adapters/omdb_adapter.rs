//! OMDb metadata provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use omdb::OmdbClient;

use crate::{MetadataProvider, PartialMetadata, ProviderError};

/// OMDb metadata provider
///
/// Single-endpoint source. OMDb credits carry no external actor ids, so
/// this provider contributes no actor refs; it fills the image, country,
/// language and genre fields the other sources tend to miss.
pub struct OmdbProvider {
    client: Arc<OmdbClient>,
}

impl OmdbProvider {
    pub fn new(client: Arc<OmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataProvider for OmdbProvider {
    async fn fetch(
        &self,
        _movie_id: Option<i64>,
        title: &str,
        year: Option<i32>,
    ) -> Result<PartialMetadata, ProviderError> {
        let record = self.client.fetch_by_title(title, year).await?;

        tracing::debug!("[{}] OMDb fetched successfully", title);

        Ok(PartialMetadata {
            poster_path: record.poster(),
            country: record.country(),
            original_language: record.language(),
            genre: record.genre(),
            ..Default::default()
        })
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
