use crate::models::TvSearchResponse;
use crate::TmdbClient;

impl TmdbClient {
    /// Search TV titles by name, optionally filtered by first-air year.
    pub async fn search_tv(
        &self,
        query: &str,
        year: Option<i32>,
    ) -> crate::Result<TvSearchResponse> {
        let mut params = vec![
            ("query", query.to_string()),
            ("language", self.lang.clone()),
        ];
        if let Some(year) = year {
            params.push(("year", year.to_string()));
        }

        self.get("/search/tv", &params).await
    }
}
