use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Actor gender as reported by providers (TMDb codes 0/1/2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unknown,
    Female,
    Male,
}

impl Gender {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Gender::Female,
            2 => Gender::Male,
            _ => Gender::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Unknown => "unknown",
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "female" => Gender::Female,
            "male" => Gender::Male,
            _ => Gender::Unknown,
        })
    }
}

/// One credited actor as seen by a provider.
///
/// `character` is the role played in this specific title (an actor with
/// several credited roles gets them comma-joined); it belongs to the
/// title relationship, not to the actor entity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRef {
    pub actor_id: i64,
    pub name: Option<String>,
    pub character: String,
    pub profile_path: Option<String>,
    pub gender: Gender,
}

/// Sparse metadata record produced by one provider.
///
/// Every field is optional; `None` means the provider has no opinion
/// about that field, never "clear this field".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialMetadata {
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
    pub genre: Option<String>,
    pub status: Option<String>,
    pub actors: Vec<ActorRef>,
}
