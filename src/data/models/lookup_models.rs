use serde::Deserialize;
use std::fmt;

/// A trimmed, non-empty word or prefix typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` when nothing but whitespace was typed.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Query(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `GET /search` on the dictionary service.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResult {
    pub found: bool,
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub corrections: Option<Vec<String>>,
}

pub type SuggestionList = Vec<String>;
pub type CorrectionList = Vec<String>;

// Form submits from the search page
#[derive(Debug, Deserialize)]
pub struct WordParams {
    #[serde(default)]
    pub q: String,
}

// Suggestion clicks
#[derive(Debug, Deserialize)]
pub struct SelectParams {
    #[serde(default)]
    pub word: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = Query::parse("  hello \n").unwrap();
        assert_eq!(query.as_str(), "hello");
    }

    #[test]
    fn blank_query_is_rejected() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse(" \t ").is_none());
    }

    #[test]
    fn lookup_miss_without_corrections_decodes() {
        let result: LookupResult = serde_json::from_str(r#"{"found":false}"#).unwrap();
        assert!(!result.found);
        assert!(result.definition.is_none());
        assert!(result.corrections.is_none());
    }

    #[test]
    fn lookup_hit_decodes_echoed_word() {
        let result: LookupResult =
            serde_json::from_str(r#"{"found":true,"word":"cat","definition":"A pet."}"#).unwrap();
        assert!(result.found);
        assert_eq!(result.word.as_deref(), Some("cat"));
        assert_eq!(result.definition.as_deref(), Some("A pet."));
    }
}
