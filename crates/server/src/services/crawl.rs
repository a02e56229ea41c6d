use std::sync::Arc;

use futures::future::join_all;
use metadata::{merge, CanonicalMetadata, MergeError, MetadataProvider, PartialMetadata};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::models::{CrawlRequest, CrawlResultEvent, Metadata, NewMetadata};
use crate::repositories::{ActorLink, ActorRepository, MetadataRepository};
use crate::services::NotifierHandle;

#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    #[error("no provider returned data for '{title}'")]
    AllProvidersFailed { title: String },
    #[error("providers returned no usable identity for '{title}'")]
    InsufficientData { title: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Orchestrates one crawl: fan out to the providers, merge, reconcile
/// against storage and announce the result.
pub struct CrawlService {
    db: SqlitePool,
    providers: Vec<Arc<dyn MetadataProvider>>,
    notifier: NotifierHandle,
}

impl CrawlService {
    pub fn new(
        db: SqlitePool,
        providers: Vec<Arc<dyn MetadataProvider>>,
        notifier: NotifierHandle,
    ) -> Self {
        Self {
            db,
            providers,
            notifier,
        }
    }

    pub async fn crawl(&self, request: &CrawlRequest) -> Result<Metadata, CrawlError> {
        let partials = self.fetch_all(request).await;
        if partials.is_empty() {
            return Err(CrawlError::AllProvidersFailed {
                title: request.title.clone(),
            });
        }

        let canonical = merge(&partials).map_err(|e| match e {
            MergeError::InsufficientData => CrawlError::InsufficientData {
                title: request.title.clone(),
            },
        })?;

        let links = self.reconcile_actors(&canonical).await?;
        let saved = self.reconcile_metadata(request, canonical, &links).await?;

        info!(
            metadata_id = saved.id,
            movie_id = request.movie_id,
            title = %request.title,
            "Crawl reconciled"
        );

        self.notifier.publish(CrawlResultEvent {
            movie_id: request.movie_id,
            metadata_id: saved.id,
            number_of_episodes: saved.number_of_episodes,
            vote_average: saved.vote_average,
        });

        Ok(saved)
    }

    /// Query every provider concurrently and keep the successes in
    /// registry order, which is also merge priority order.
    async fn fetch_all(&self, request: &CrawlRequest) -> Vec<PartialMetadata> {
        let fetches = self.providers.iter().map(|provider| {
            let provider = provider.clone();
            async move {
                let result = provider
                    .fetch(request.movie_id, &request.title, request.release_year)
                    .await;
                (provider.name(), result)
            }
        });

        let mut partials = Vec::with_capacity(self.providers.len());
        for (name, result) in join_all(fetches).await {
            match result {
                Ok(partial) => partials.push(partial),
                Err(e) => {
                    warn!(provider = name, title = %request.title, "Provider fetch failed: {}", e);
                }
            }
        }
        partials
    }

    /// Upsert every merged actor and collect the join rows, keeping
    /// cast order.
    async fn reconcile_actors(
        &self,
        canonical: &CanonicalMetadata,
    ) -> Result<Vec<ActorLink>, CrawlError> {
        let mut links = Vec::with_capacity(canonical.actors.len());
        for actor in &canonical.actors {
            let persisted = ActorRepository::upsert(&self.db, actor).await?;
            links.push(ActorLink {
                actor_pk: persisted.id,
                character_name: actor.character.clone(),
            });
        }
        Ok(links)
    }

    /// Find the row this crawl belongs to and insert or refresh it.
    ///
    /// An external movie id always decides ownership. When no row
    /// carries the id, a search-title match absorbs the crawl instead
    /// of inserting a colliding row; the matched row's movie id is
    /// never re-pointed.
    async fn reconcile_metadata(
        &self,
        request: &CrawlRequest,
        canonical: CanonicalMetadata,
        links: &[ActorLink],
    ) -> Result<Metadata, CrawlError> {
        let existing = match request.movie_id {
            Some(movie_id) => {
                match MetadataRepository::get_by_movie_id(&self.db, movie_id).await? {
                    row @ Some(_) => row,
                    None => {
                        MetadataRepository::get_by_search_title(&self.db, &request.title).await?
                    }
                }
            }
            None => MetadataRepository::get_by_search_title(&self.db, &request.title).await?,
        };

        let saved = match existing {
            Some(row) => {
                MetadataRepository::update_refresh_with_actors(&self.db, row.id, &canonical, links)
                    .await?
            }
            None => {
                let new = NewMetadata {
                    movie_id: request.movie_id,
                    search_title: request.title.clone(),
                    canonical,
                };
                MetadataRepository::insert_with_actors(&self.db, &new, links).await?
            }
        };

        Ok(saved)
    }
}
