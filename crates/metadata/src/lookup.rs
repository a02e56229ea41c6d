//! Code-to-name lookup tables
//!
//! Genre codes and language codes are domain data, not behavior: the
//! default tables below can be swapped for a different provider's table
//! with `from_pairs` without touching any mapping logic.

use std::collections::HashMap;

use crate::strings::join_comma_list;

/// Maps numeric genre codes to human-readable names.
#[derive(Debug, Clone)]
pub struct GenreMap {
    names: HashMap<i64, String>,
}

impl GenreMap {
    /// Build a map from arbitrary (code, name) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        Self {
            names: pairs.into_iter().map(|(id, n)| (id, n.into())).collect(),
        }
    }

    /// The TMDb TV genre table.
    pub fn tmdb_tv() -> Self {
        Self::from_pairs([
            (10759, "Action & Adventure"),
            (16, "Animation"),
            (35, "Comedy"),
            (80, "Crime"),
            (99, "Documentary"),
            (18, "Drama"),
            (10751, "Family"),
            (10762, "Kids"),
            (9648, "Mystery"),
            (10763, "News"),
            (10764, "Reality"),
            (10765, "Sci-Fi & Fantasy"),
            (10766, "Soap"),
            (10767, "Talk"),
            (10768, "War & Politics"),
            (37, "Western"),
        ])
    }

    pub fn display_name(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Render a list of genre codes as one comma-joined display string.
    /// Unknown codes are skipped; an empty result becomes `None`.
    pub fn join_names(&self, ids: &[i64]) -> Option<String> {
        let names: Vec<String> = ids
            .iter()
            .filter_map(|id| self.display_name(*id))
            .map(String::from)
            .collect();
        join_comma_list(&names)
    }
}

/// Maps ISO language codes to display names.
#[derive(Debug, Clone)]
pub struct LanguageMap {
    names: HashMap<String, String>,
}

impl LanguageMap {
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(c, n)| (c.into(), n.into()))
                .collect(),
        }
    }

    pub fn defaults() -> Self {
        Self::from_pairs([("en", "English"), ("ko", "Korean"), ("zh", "Chinese")])
    }

    /// Display name for a code, falling back to the code itself.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_genre_codes_resolve() {
        let genres = GenreMap::tmdb_tv();
        assert_eq!(genres.display_name(18), Some("Drama"));
        assert_eq!(genres.display_name(10765), Some("Sci-Fi & Fantasy"));
    }

    #[test]
    fn join_names_skips_unknown_codes() {
        let genres = GenreMap::tmdb_tv();
        assert_eq!(
            genres.join_names(&[18, 424242, 9648]).as_deref(),
            Some("Drama, Mystery")
        );
        assert!(genres.join_names(&[424242]).is_none());
        assert!(genres.join_names(&[]).is_none());
    }

    #[test]
    fn custom_table_replaces_default() {
        let genres = GenreMap::from_pairs([(1, "Everything")]);
        assert_eq!(genres.display_name(1), Some("Everything"));
        assert_eq!(genres.display_name(18), None);
    }

    #[test]
    fn language_falls_back_to_code() {
        let langs = LanguageMap::defaults();
        assert_eq!(langs.display_name("en"), "English");
        assert_eq!(langs.display_name("xx"), "xx");
    }
}
