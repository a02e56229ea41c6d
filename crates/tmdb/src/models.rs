use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TvSearchResponse {
    pub page: i64,
    pub results: Vec<TvSearchResult>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvSearchResult {
    pub id: i64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvDetail {
    pub id: i64,
    pub adult: Option<bool>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<TvGenre>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    pub original_language: Option<String>,
    pub number_of_episodes: Option<i32>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
    pub backdrop_path: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvGenre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregateCredits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    /// TMDb gender code: 0 unknown, 1 female, 2 male
    pub gender: Option<i64>,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub roles: Vec<CastRole>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastRole {
    pub character: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvImages {
    #[serde(default)]
    pub backdrops: Vec<Image>,
    #[serde(default)]
    pub posters: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub file_path: String,
}
