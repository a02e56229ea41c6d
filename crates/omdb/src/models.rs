use serde::Deserialize;

/// Raw OMDb title record. OMDb reports missing fields as the string
/// "N/A"; the accessor methods normalize those to `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbTitle {
    pub title: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub poster: Option<String>,
    pub response: String,
    pub error: Option<String>,
}

impl OmdbTitle {
    pub fn is_failure(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }

    pub fn poster(&self) -> Option<String> {
        normalize(&self.poster)
    }

    pub fn country(&self) -> Option<String> {
        normalize(&self.country)
    }

    pub fn language(&self) -> Option<String> {
        normalize(&self.language)
    }

    pub fn genre(&self) -> Option<String> {
        normalize(&self.genre)
    }
}

fn normalize(value: &Option<String>) -> Option<String> {
    match value.as_deref() {
        None | Some("") | Some("N/A") => None,
        Some(v) => Some(v.to_string()),
    }
}
