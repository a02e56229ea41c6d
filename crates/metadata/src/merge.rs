//! Record merger
//!
//! Folds the partial records produced by the providers into one
//! canonical record. The fold is a deterministic left-to-right scan in
//! provider-priority order (the order the coordinator registered the
//! providers in), with an explicit per-field policy:
//!
//! - stable fields: first non-absent value wins
//! - latest-wins fields (vote_average, vote_count, popularity,
//!   poster_path, backdrop_path): last non-absent value wins, since
//!   rating and image data is provider-volatile and should track the
//!   freshest observation
//! - actor lists: non-empty lists are appended in priority order and
//!   deduplicated by actor id; an empty list never clears a populated one

use thiserror::Error;

use crate::models::{ActorRef, PartialMetadata};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    /// Neither a title nor an external id survived the merge; there is
    /// nothing worth persisting.
    #[error("merged record has no title and no external id")]
    InsufficientData,
}

/// The merged, persistable record. Same shape as a partial, but every
/// resolved field is authoritative for this crawl.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalMetadata {
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
    pub release_date: Option<chrono::NaiveDate>,
    pub country: Option<String>,
    pub original_language: Option<String>,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub actors: Vec<ActorRef>,
}

/// Merge partial records listed in provider-priority order.
pub fn merge(partials: &[PartialMetadata]) -> Result<CanonicalMetadata, MergeError> {
    // First non-absent value in priority order.
    fn first<T: Clone>(
        partials: &[PartialMetadata],
        field: impl Fn(&PartialMetadata) -> Option<T>,
    ) -> Option<T> {
        partials.iter().find_map(field)
    }

    // Last non-absent value, for the volatile fields.
    fn latest<T: Clone>(
        partials: &[PartialMetadata],
        field: impl Fn(&PartialMetadata) -> Option<T>,
    ) -> Option<T> {
        partials.iter().rev().find_map(field)
    }

    let merged = CanonicalMetadata {
        tmdb_id: first(partials, |p| p.tmdb_id),
        for_adult: first(partials, |p| p.for_adult),
        title: first(partials, |p| p.title.clone()),
        original_title: first(partials, |p| p.original_title.clone()),
        description: first(partials, |p| p.description.clone()),
        number_of_episodes: first(partials, |p| p.number_of_episodes),
        vote_average: latest(partials, |p| p.vote_average),
        vote_count: latest(partials, |p| p.vote_count),
        popularity: latest(partials, |p| p.popularity),
        poster_path: latest(partials, |p| p.poster_path.clone()),
        backdrop_path: latest(partials, |p| p.backdrop_path.clone()),
        release_date: first(partials, |p| p.release_date),
        country: first(partials, |p| p.country.clone()),
        original_language: first(partials, |p| p.original_language.clone()),
        genre: first(partials, |p| p.genre.clone()),
        status: first(partials, |p| p.status.clone()),
        actors: merge_actors(partials),
    };

    if merged.title.is_none() && merged.tmdb_id.is_none() {
        return Err(MergeError::InsufficientData);
    }

    Ok(merged)
}

/// Cast lists are concatenated in priority order and deduplicated by
/// external actor id (first sighting wins). Providers without a cast
/// list contribute nothing and cannot clear an already-populated list.
fn merge_actors(partials: &[PartialMetadata]) -> Vec<ActorRef> {
    let mut seen = std::collections::HashSet::new();
    let mut actors = Vec::new();

    for partial in partials {
        for actor in &partial.actors {
            if seen.insert(actor.actor_id) {
                actors.push(actor.clone());
            }
        }
    }

    actors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn actor(id: i64, name: &str, character: &str) -> ActorRef {
        ActorRef {
            actor_id: id,
            name: Some(name.to_string()),
            character: character.to_string(),
            profile_path: None,
            gender: Gender::Unknown,
        }
    }

    fn titled(title: &str) -> PartialMetadata {
        PartialMetadata {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn higher_priority_partial_wins_stable_fields() {
        let p1 = PartialMetadata {
            title: Some("Primary".to_string()),
            description: Some("from p1".to_string()),
            ..Default::default()
        };
        let p2 = PartialMetadata {
            title: Some("Secondary".to_string()),
            description: Some("from p2".to_string()),
            country: Some("US".to_string()),
            ..Default::default()
        };

        let merged = merge(&[p1, p2]).unwrap();
        assert_eq!(merged.title.as_deref(), Some("Primary"));
        assert_eq!(merged.description.as_deref(), Some("from p1"));
        // Field set only in the lower-priority partial still fills in
        assert_eq!(merged.country.as_deref(), Some("US"));
    }

    #[test]
    fn latest_wins_fields_take_last_observed_value() {
        let p1 = PartialMetadata {
            title: Some("X".to_string()),
            vote_average: Some(7.5),
            poster_path: Some("/first.jpg".to_string()),
            ..Default::default()
        };
        let p2 = PartialMetadata {
            vote_average: Some(8.0),
            poster_path: Some("/last.jpg".to_string()),
            ..Default::default()
        };

        let merged = merge(&[p1, p2]).unwrap();
        assert_eq!(merged.vote_average, Some(8.0));
        assert_eq!(merged.poster_path.as_deref(), Some("/last.jpg"));
    }

    #[test]
    fn latest_wins_ignores_trailing_absence() {
        let p1 = PartialMetadata {
            title: Some("X".to_string()),
            vote_average: Some(7.5),
            ..Default::default()
        };
        // Lower-priority partial has no opinion on vote_average
        let p2 = titled("Y");

        let merged = merge(&[p1, p2]).unwrap();
        assert_eq!(merged.vote_average, Some(7.5));
    }

    #[test]
    fn actor_lists_concatenate_and_dedup_by_id() {
        let mut p1 = titled("X");
        p1.actors = vec![actor(1, "A", "Hero"), actor(2, "B", "Villain")];
        let mut p2 = titled("Y");
        p2.actors = vec![actor(2, "B-alias", "Other"), actor(3, "C", "Extra")];

        let merged = merge(&[p1, p2]).unwrap();
        let ids: Vec<i64> = merged.actors.iter().map(|a| a.actor_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // First sighting of a duplicated actor wins
        assert_eq!(merged.actors[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn empty_cast_list_does_not_clear_populated_one() {
        let mut p1 = titled("X");
        p1.actors = vec![actor(1, "A", "Hero")];
        let p2 = titled("Y");

        let merged = merge(&[p1, p2]).unwrap();
        assert_eq!(merged.actors.len(), 1);
    }

    #[test]
    fn merge_fails_without_title_or_external_id() {
        let sparse = PartialMetadata {
            country: Some("US".to_string()),
            ..Default::default()
        };

        assert_eq!(merge(&[sparse]), Err(MergeError::InsufficientData));
    }

    #[test]
    fn external_id_alone_is_sufficient() {
        let partial = PartialMetadata {
            tmdb_id: Some(42),
            ..Default::default()
        };

        assert!(merge(&[partial]).is_ok());
    }

    #[test]
    fn two_provider_scenario() {
        // Provider A: title, rating, one actor with a blank character
        let a = PartialMetadata {
            title: Some("Example Show".to_string()),
            vote_average: Some(7.5),
            actors: vec![ActorRef {
                actor_id: 1,
                name: Some("X".to_string()),
                character: String::new(),
                profile_path: None,
                gender: Gender::Unknown,
            }],
            ..Default::default()
        };
        // Provider B: image and country only
        let b = PartialMetadata {
            poster_path: Some("/p.jpg".to_string()),
            country: Some("US".to_string()),
            ..Default::default()
        };

        let merged = merge(&[a, b]).unwrap();
        assert_eq!(merged.title.as_deref(), Some("Example Show"));
        assert_eq!(merged.vote_average, Some(7.5));
        assert_eq!(merged.poster_path.as_deref(), Some("/p.jpg"));
        assert_eq!(merged.country.as_deref(), Some("US"));
        assert_eq!(merged.actors.len(), 1);
        assert_eq!(merged.actors[0].actor_id, 1);
    }
}
