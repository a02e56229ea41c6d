use metadata::CanonicalMetadata;
use sqlx::SqlitePool;

use crate::models::{Metadata, NewMetadata, PersistedActor};

/// Common SELECT fields for metadata queries
const SELECT_METADATA: &str = r#"
    SELECT id, created_at, updated_at, movie_id, search_title, tmdb_id,
           for_adult, title, original_title, description,
           number_of_episodes, vote_average, vote_count, popularity,
           poster_path, backdrop_path, release_date, country,
           original_language, genre, status
    FROM metadata
"#;

/// A cast link to persist alongside a metadata row, carrying the actor
/// table's surrogate key.
#[derive(Debug, Clone)]
pub struct ActorLink {
    pub actor_pk: i64,
    pub character_name: String,
}

pub struct MetadataRepository;

impl MetadataRepository {
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Metadata>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_METADATA);
        sqlx::query_as::<_, Metadata>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn get_by_movie_id(
        pool: &SqlitePool,
        movie_id: i64,
    ) -> Result<Option<Metadata>, sqlx::Error> {
        let query = format!("{} WHERE movie_id = $1", SELECT_METADATA);
        sqlx::query_as::<_, Metadata>(&query)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn get_by_search_title(
        pool: &SqlitePool,
        search_title: &str,
    ) -> Result<Option<Metadata>, sqlx::Error> {
        let query = format!("{} WHERE search_title = $1", SELECT_METADATA);
        sqlx::query_as::<_, Metadata>(&query)
            .bind(search_title)
            .fetch_optional(pool)
            .await
    }

    /// Whether any row already answers to this title, either as the
    /// requested search title or as the resolved display title.
    pub async fn title_exists(pool: &SqlitePool, title: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM metadata
            WHERE lower(search_title) = lower($1) OR lower(title) = lower($1)
            "#,
        )
        .bind(title)
        .fetch_one(pool)
        .await?;

        Ok(count > 0)
    }

    /// Insert a new metadata row together with its cast links in one
    /// transaction.
    pub async fn insert_with_actors(
        pool: &SqlitePool,
        new: &NewMetadata,
        links: &[ActorLink],
    ) -> Result<Metadata, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let canonical = &new.canonical;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO metadata (
                movie_id, search_title, tmdb_id, for_adult, title,
                original_title, description, number_of_episodes,
                vote_average, vote_count, popularity, poster_path,
                backdrop_path, release_date, country, original_language,
                genre, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18)
            RETURNING id
            "#,
        )
        .bind(new.movie_id)
        .bind(&new.search_title)
        .bind(canonical.tmdb_id)
        .bind(canonical.for_adult)
        .bind(&canonical.title)
        .bind(&canonical.original_title)
        .bind(&canonical.description)
        .bind(canonical.number_of_episodes)
        .bind(canonical.vote_average)
        .bind(canonical.vote_count)
        .bind(canonical.popularity)
        .bind(&canonical.poster_path)
        .bind(&canonical.backdrop_path)
        .bind(canonical.release_date)
        .bind(&canonical.country)
        .bind(&canonical.original_language)
        .bind(&canonical.genre)
        .bind(&canonical.status)
        .fetch_one(&mut *tx)
        .await?;

        for link in links {
            sqlx::query(
                r#"
                INSERT INTO metadata_actor (metadata_id, actor_id, character_name)
                VALUES ($1, $2, $3)
                ON CONFLICT(metadata_id, actor_id) DO NOTHING
                "#,
            )
            .bind(id)
            .bind(link.actor_pk)
            .bind(&link.character_name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Refresh an existing row from a newer crawl.
    ///
    /// Only the volatile fields change: votes, popularity and artwork,
    /// each through COALESCE so an absent value never clobbers a stored
    /// one. Identity fields the newer crawl resolved are discarded. A
    /// non-empty link list replaces the cast wholesale; an empty list
    /// leaves the existing cast untouched.
    pub async fn update_refresh_with_actors(
        pool: &SqlitePool,
        id: i64,
        canonical: &CanonicalMetadata,
        links: &[ActorLink],
    ) -> Result<Metadata, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE metadata SET
                vote_average = COALESCE($1, vote_average),
                vote_count = COALESCE($2, vote_count),
                popularity = COALESCE($3, popularity),
                poster_path = COALESCE($4, poster_path),
                backdrop_path = COALESCE($5, backdrop_path),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $6
            "#,
        )
        .bind(canonical.vote_average)
        .bind(canonical.vote_count)
        .bind(canonical.popularity)
        .bind(&canonical.poster_path)
        .bind(&canonical.backdrop_path)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if !links.is_empty() {
            sqlx::query("DELETE FROM metadata_actor WHERE metadata_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for link in links {
                sqlx::query(
                    r#"
                    INSERT INTO metadata_actor (metadata_id, actor_id, character_name)
                    VALUES ($1, $2, $3)
                    ON CONFLICT(metadata_id, actor_id) DO NOTHING
                    "#,
                )
                .bind(id)
                .bind(link.actor_pk)
                .bind(&link.character_name)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Cast of a metadata row with character names, in the order the
    /// links were written (billing order)
    pub async fn actors_for(
        pool: &SqlitePool,
        metadata_id: i64,
    ) -> Result<Vec<(PersistedActor, String)>, sqlx::Error> {
        #[derive(sqlx::FromRow)]
        struct CastRow {
            id: i64,
            actor_id: i64,
            name: Option<String>,
            gender: String,
            profile_path: Option<String>,
            character_name: String,
        }

        let rows = sqlx::query_as::<_, CastRow>(
            r#"
            SELECT a.id, a.actor_id, a.name, a.gender, a.profile_path,
                   ma.character_name
            FROM metadata_actor ma
            JOIN actor a ON a.id = ma.actor_id
            WHERE ma.metadata_id = $1
            ORDER BY ma.rowid
            "#,
        )
        .bind(metadata_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    PersistedActor {
                        id: row.id,
                        actor_id: row.actor_id,
                        name: row.name,
                        gender: row.gender.parse().unwrap_or_default(),
                        profile_path: row.profile_path,
                    },
                    row.character_name,
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::ActorRepository;
    use metadata::{ActorRef, Gender};

    fn canonical(title: &str) -> CanonicalMetadata {
        CanonicalMetadata {
            tmdb_id: Some(100),
            title: Some(title.to_string()),
            vote_average: Some(8.1),
            vote_count: Some(900),
            genre: Some("Drama".to_string()),
            ..Default::default()
        }
    }

    fn new_metadata(movie_id: Option<i64>, search_title: &str) -> NewMetadata {
        NewMetadata {
            movie_id,
            search_title: search_title.to_string(),
            canonical: canonical(search_title),
        }
    }

    #[tokio::test]
    async fn insert_then_lookup_by_both_keys() {
        let pool = crate::test_support::memory_pool().await;

        let saved =
            MetadataRepository::insert_with_actors(&pool, &new_metadata(Some(42), "Dark"), &[])
                .await
                .unwrap();

        let by_movie = MetadataRepository::get_by_movie_id(&pool, 42)
            .await
            .unwrap()
            .unwrap();
        let by_title = MetadataRepository::get_by_search_title(&pool, "Dark")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(by_movie.id, saved.id);
        assert_eq!(by_title.id, saved.id);
        assert_eq!(by_movie.title.as_deref(), Some("Dark"));
    }

    #[tokio::test]
    async fn title_exists_matches_search_and_display_title() {
        let pool = crate::test_support::memory_pool().await;

        let mut new = new_metadata(None, "dark  s01");
        new.canonical.title = Some("Dark".to_string());
        MetadataRepository::insert_with_actors(&pool, &new, &[])
            .await
            .unwrap();

        assert!(MetadataRepository::title_exists(&pool, "DARK  S01")
            .await
            .unwrap());
        assert!(MetadataRepository::title_exists(&pool, "dark").await.unwrap());
        assert!(!MetadataRepository::title_exists(&pool, "Other")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn refresh_keeps_stored_values_when_update_is_sparse() {
        let pool = crate::test_support::memory_pool().await;

        let saved =
            MetadataRepository::insert_with_actors(&pool, &new_metadata(Some(7), "Dark"), &[])
                .await
                .unwrap();

        let sparse = CanonicalMetadata {
            vote_average: Some(8.4),
            ..Default::default()
        };
        let updated =
            MetadataRepository::update_refresh_with_actors(&pool, saved.id, &sparse, &[])
                .await
                .unwrap();

        assert_eq!(updated.vote_average, Some(8.4));
        // Absent fields never clobber stored values
        assert_eq!(updated.title.as_deref(), Some("Dark"));
        assert_eq!(updated.genre.as_deref(), Some("Drama"));
        assert_eq!(updated.tmdb_id, Some(100));
    }

    #[tokio::test]
    async fn refresh_never_touches_identity_fields() {
        let pool = crate::test_support::memory_pool().await;

        let saved =
            MetadataRepository::insert_with_actors(&pool, &new_metadata(Some(8), "Dark"), &[])
                .await
                .unwrap();

        // A later crawl resolving a different identity must not win
        let rival = CanonicalMetadata {
            title: Some("Renamed".to_string()),
            description: Some("Different description".to_string()),
            tmdb_id: Some(999),
            vote_average: Some(9.9),
            ..Default::default()
        };
        let updated =
            MetadataRepository::update_refresh_with_actors(&pool, saved.id, &rival, &[])
                .await
                .unwrap();

        assert_eq!(updated.vote_average, Some(9.9));
        assert_eq!(updated.title.as_deref(), Some("Dark"));
        assert_eq!(updated.description, None);
        assert_eq!(updated.tmdb_id, Some(100));
    }

    #[tokio::test]
    async fn cast_keeps_billing_order_across_shared_actors() {
        let pool = crate::test_support::memory_pool().await;

        // Jane gets the smaller surrogate key by being seen first
        let jane = ActorRepository::upsert(
            &pool,
            &ActorRef {
                actor_id: 1,
                name: Some("Jane".to_string()),
                character: String::new(),
                profile_path: None,
                gender: Gender::Female,
            },
        )
        .await
        .unwrap();
        let john = ActorRepository::upsert(
            &pool,
            &ActorRef {
                actor_id: 2,
                name: Some("John".to_string()),
                character: String::new(),
                profile_path: None,
                gender: Gender::Male,
            },
        )
        .await
        .unwrap();

        let saved = MetadataRepository::insert_with_actors(
            &pool,
            &new_metadata(Some(11), "Dark"),
            &[
                ActorLink {
                    actor_pk: john.id,
                    character_name: "Jonas".to_string(),
                },
                ActorLink {
                    actor_pk: jane.id,
                    character_name: "Martha".to_string(),
                },
            ],
        )
        .await
        .unwrap();

        let cast = MetadataRepository::actors_for(&pool, saved.id).await.unwrap();
        let names: Vec<_> = cast.iter().map(|(a, _)| a.name.as_deref()).collect();
        assert_eq!(names, vec![Some("John"), Some("Jane")]);
    }

    #[tokio::test]
    async fn cast_links_survive_insert_and_replace_on_refresh() {
        let pool = crate::test_support::memory_pool().await;

        let jane = ActorRepository::upsert(
            &pool,
            &ActorRef {
                actor_id: 1,
                name: Some("Jane".to_string()),
                character: String::new(),
                profile_path: None,
                gender: Gender::Female,
            },
        )
        .await
        .unwrap();
        let john = ActorRepository::upsert(
            &pool,
            &ActorRef {
                actor_id: 2,
                name: Some("John".to_string()),
                character: String::new(),
                profile_path: None,
                gender: Gender::Male,
            },
        )
        .await
        .unwrap();

        let saved = MetadataRepository::insert_with_actors(
            &pool,
            &new_metadata(Some(9), "Dark"),
            &[ActorLink {
                actor_pk: jane.id,
                character_name: "Martha".to_string(),
            }],
        )
        .await
        .unwrap();

        let cast = MetadataRepository::actors_for(&pool, saved.id).await.unwrap();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0].1, "Martha");

        MetadataRepository::update_refresh_with_actors(
            &pool,
            saved.id,
            &canonical("Dark"),
            &[ActorLink {
                actor_pk: john.id,
                character_name: "Jonas".to_string(),
            }],
        )
        .await
        .unwrap();

        let cast = MetadataRepository::actors_for(&pool, saved.id).await.unwrap();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0].0.name.as_deref(), Some("John"));
        assert_eq!(cast[0].1, "Jonas");
    }
}
