use chrono::NaiveDate;
use metadata::{split_comma_list, LanguageMap};
use serde::Serialize;

use super::{Metadata, PersistedActor};

#[derive(Debug, Clone, Serialize)]
pub struct ActorResponse {
    pub id: i64,
    pub name: Option<String>,
    pub profile_path: Option<String>,
    pub character_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetadataResponse {
    pub id: i64,
    pub movie_id: Option<i64>,
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
    pub language_display: Option<String>,
    pub genre: Vec<String>,
    pub status: Option<String>,
    pub actors: Vec<ActorResponse>,
}

impl MetadataResponse {
    /// Assemble the API representation: the stored comma-joined genre
    /// string becomes a list, language codes get a display name, and
    /// actors carry their per-title character names.
    pub fn from_entity(
        entity: Metadata,
        actors: Vec<(PersistedActor, String)>,
        languages: &LanguageMap,
    ) -> Self {
        let genre = entity
            .genre
            .as_deref()
            .map(split_comma_list)
            .unwrap_or_default();

        let language_display = entity
            .original_language
            .as_deref()
            .map(|code| languages.display_name(code).to_string());

        Self {
            id: entity.id,
            movie_id: entity.movie_id,
            tmdb_id: entity.tmdb_id,
            for_adult: entity.for_adult,
            title: entity.title,
            original_title: entity.original_title,
            description: entity.description,
            number_of_episodes: entity.number_of_episodes,
            vote_average: entity.vote_average,
            vote_count: entity.vote_count,
            popularity: entity.popularity,
            poster_path: entity.poster_path,
            backdrop_path: entity.backdrop_path,
            release_date: entity.release_date,
            country: entity.country,
            original_language: entity.original_language,
            language_display,
            genre,
            status: entity.status,
            actors: actors
                .into_iter()
                .map(|(actor, character_name)| ActorResponse {
                    id: actor.id,
                    name: actor.name,
                    profile_path: actor.profile_path,
                    character_name,
                })
                .collect(),
        }
    }
}
