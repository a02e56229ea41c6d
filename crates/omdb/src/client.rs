use reqwest::Client;

use crate::error::OmdbError;
use crate::models::OmdbTitle;

const BASE_URL: &str = "https://www.omdbapi.com";

pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Create an OmdbClient with a reqwest Client and an API key.
    ///
    /// The caller owns the client's request timeout.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch a title record by exact title, optionally filtered by year.
    pub async fn fetch_by_title(
        &self,
        title: &str,
        year: Option<i32>,
    ) -> crate::Result<OmdbTitle> {
        let mut params = vec![
            ("t", title.to_string()),
            ("apikey", self.api_key.clone()),
        ];
        if let Some(year) = year {
            params.push(("y", year.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(OmdbError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(OmdbError::from_reqwest)?;
        if !status.is_success() {
            return Err(OmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        let record: OmdbTitle =
            serde_path_to_error::deserialize(deserializer).map_err(|e| OmdbError::Json {
                path: e.path().to_string(),
                source: e.into_inner(),
            })?;

        // OMDb reports lookup misses inside a 200 response
        if record.is_failure() {
            return Err(OmdbError::NotFound(title.to_string()));
        }

        Ok(record)
    }
}
