use reqwest::Client;

use crate::error::TmdbError;

const BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbClient {
    client: Client,
    token: String,
    base_url: String,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a reqwest Client and a bearer token.
    ///
    /// The caller owns the client's request timeout; every call through
    /// this struct inherits it.
    pub fn new(client: Client, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
            base_url: BASE_URL.to_string(),
            lang: "en-US".to_string(),
        }
    }

    /// Override the API base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> crate::Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(TmdbError::from_reqwest)?;

        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await.map_err(TmdbError::from_reqwest)?;
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
