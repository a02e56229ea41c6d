use metadata::{ActorRef, Gender};
use sqlx::SqlitePool;

use crate::models::PersistedActor;

/// Common SELECT fields for actor queries
const SELECT_ACTOR: &str = r#"
    SELECT id, actor_id, name, gender, profile_path
    FROM actor
"#;

#[derive(Debug, sqlx::FromRow)]
struct ActorRow {
    id: i64,
    actor_id: i64,
    name: Option<String>,
    gender: String,
    profile_path: Option<String>,
}

impl From<ActorRow> for PersistedActor {
    fn from(row: ActorRow) -> Self {
        Self {
            id: row.id,
            actor_id: row.actor_id,
            name: row.name,
            gender: row.gender.parse::<Gender>().unwrap_or_default(),
            profile_path: row.profile_path,
        }
    }
}

pub struct ActorRepository;

impl ActorRepository {
    /// Get an actor by its external actor id
    pub async fn get_by_actor_id(
        pool: &SqlitePool,
        actor_id: i64,
    ) -> Result<Option<PersistedActor>, sqlx::Error> {
        let query = format!("{} WHERE actor_id = $1", SELECT_ACTOR);
        let row = sqlx::query_as::<_, ActorRow>(&query)
            .bind(actor_id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Idempotent insert-or-return-existing keyed on the external actor
    /// id.
    ///
    /// Concurrent crawls may race on a not-yet-seen actor; the conflict
    /// is resolved at the storage layer (`ON CONFLICT DO NOTHING`) and
    /// the loser converges on the winner's row via the read-back. An
    /// existing row's fields are never overwritten here.
    pub async fn upsert(
        pool: &SqlitePool,
        actor: &ActorRef,
    ) -> Result<PersistedActor, sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO actor (actor_id, name, gender, profile_path)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(actor_id) DO NOTHING
            "#,
        )
        .bind(actor.actor_id)
        .bind(&actor.name)
        .bind(actor.gender.as_str())
        .bind(&actor.profile_path)
        .execute(pool)
        .await?;

        Self::get_by_actor_id(pool, actor.actor_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Total number of actor rows (used by tests and diagnostics)
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM actor")
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::create_pool;

    fn actor_ref(actor_id: i64, name: &str) -> ActorRef {
        ActorRef {
            actor_id,
            name: Some(name.to_string()),
            character: "Lead".to_string(),
            profile_path: None,
            gender: Gender::Female,
        }
    }

    #[tokio::test]
    async fn upsert_inserts_then_reuses() {
        let pool = crate::test_support::memory_pool().await;

        let first = ActorRepository::upsert(&pool, &actor_ref(10, "Jane"))
            .await
            .unwrap();
        // Second sighting with different fields must not overwrite
        let second = ActorRepository::upsert(&pool, &actor_ref(10, "Renamed"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name.as_deref(), Some("Jane"));
        assert_eq!(ActorRepository::count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_upserts_converge_on_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("test.db").display());
        let pool = create_pool(&url, 5).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move {
                ActorRepository::upsert(&pool, &actor_ref(77, &format!("N{}", i))).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }

        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(ActorRepository::count(&pool).await.unwrap(), 1);
    }
}
