use metadata::Gender;
use serde::Serialize;

/// Persisted actor entity, keyed by the provider's external actor id.
///
/// Actor rows are shared across metadata rows and never deleted by the
/// crawl pipeline; character names live on the relationship, not here.
#[derive(Debug, Clone, Serialize)]
pub struct PersistedActor {
    pub id: i64,
    pub actor_id: i64,
    pub name: Option<String>,
    pub gender: Gender,
    pub profile_path: Option<String>,
}
