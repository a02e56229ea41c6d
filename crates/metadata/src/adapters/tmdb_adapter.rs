//! TMDb metadata provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tmdb::{CastMember, TmdbClient, TvDetail, TvImages, TvSearchResult};

use crate::lookup::GenreMap;
use crate::strings::join_comma_list;
use crate::{ActorRef, Gender, MetadataProvider, PartialMetadata, ProviderError};

/// TMDb metadata provider
///
/// TMDb is a multi-endpoint source: a crawl first resolves the TMDb id
/// through the search endpoint, then fetches detail, credits and images
/// concurrently and assembles them into one partial record.
pub struct TmdbProvider {
    client: Arc<TmdbClient>,
    genres: GenreMap,
    cast_limit: usize,
}

impl TmdbProvider {
    pub fn new(client: Arc<TmdbClient>, genres: GenreMap, cast_limit: usize) -> Self {
        Self {
            client,
            genres,
            cast_limit,
        }
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    async fn fetch(
        &self,
        _movie_id: Option<i64>,
        title: &str,
        year: Option<i32>,
    ) -> Result<PartialMetadata, ProviderError> {
        // Phase 1: resolve the TMDb id. First result wins; the year
        // filter is the only disambiguation applied.
        let search = self.client.search_tv(title, year).await?;
        let Some(hit) = search.results.into_iter().next() else {
            return Err(ProviderError::NotFound(title.to_string()));
        };

        // Phase 2: detail sub-queries run concurrently
        let (detail, credits, images) = tokio::try_join!(
            self.client.tv_detail(hit.id),
            self.client.aggregate_credits(hit.id),
            self.client.tv_images(hit.id),
        )?;

        tracing::debug!("[{}] TMDb fetched successfully (tmdb_id={})", title, hit.id);

        Ok(self.assemble(&hit, detail, credits.cast, images))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

impl TmdbProvider {
    fn assemble(
        &self,
        hit: &TvSearchResult,
        detail: TvDetail,
        cast: Vec<CastMember>,
        images: TvImages,
    ) -> PartialMetadata {
        // Detail carries named genres; fall back to mapping the search
        // result's numeric codes through the lookup table.
        let genre = if detail.genres.is_empty() {
            self.genres.join_names(&hit.genre_ids)
        } else {
            let names: Vec<String> = detail.genres.iter().map(|g| g.name.clone()).collect();
            join_comma_list(&names)
        };

        PartialMetadata {
            tmdb_id: Some(detail.id),
            for_adult: detail.adult,
            title: detail.name,
            original_title: detail.original_name,
            description: detail.overview,
            number_of_episodes: detail.number_of_episodes,
            vote_average: detail.vote_average,
            vote_count: detail.vote_count,
            popularity: detail.popularity,
            poster_path: first_image(&images.posters),
            backdrop_path: first_image(&images.backdrops),
            release_date: detail
                .first_air_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            country: detail.origin_country.first().cloned(),
            original_language: detail.original_language,
            genre,
            status: detail.status,
            actors: map_actors(&cast, self.cast_limit),
        }
    }
}

/// First candidate in the provider's returned order, no quality scoring.
fn first_image(images: &[tmdb::Image]) -> Option<String> {
    images.first().map(|i| i.file_path.clone())
}

/// Take the top entries in TMDb's billing order, joining an actor's
/// distinct non-blank roles into one comma-separated character string.
fn map_actors(cast: &[CastMember], limit: usize) -> Vec<ActorRef> {
    cast.iter()
        .take(limit)
        .map(|member| {
            let mut characters: Vec<String> = Vec::new();
            for role in &member.roles {
                if let Some(character) = role.character.as_deref() {
                    let character = character.trim();
                    if !character.is_empty() && !characters.iter().any(|c| c == character) {
                        characters.push(character.to_string());
                    }
                }
            }

            ActorRef {
                actor_id: member.id,
                name: member.name.clone(),
                character: characters.join(", "),
                profile_path: member.profile_path.clone(),
                gender: Gender::from_code(member.gender.unwrap_or(0)),
            }
        })
        .collect()
}
