use serde::Serialize;

/// Every result view the search page can show.
///
/// Each variant is rendered by `templates/views/<kind>.html`, with the
/// variant's fields as the template context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    Loading,
    InputError { message: String },
    ServiceUnavailable,
    Connected,
    Found { word: String, definition: String },
    NotFound { word: String, corrections: Vec<String> },
    Suggestions { prefix: String, suggestions: Vec<String> },
    NoSuggestions { prefix: String },
    Corrections { word: String, corrections: Vec<String> },
    NoCorrections { word: String },
}

impl View {
    pub fn template_name(&self) -> &'static str {
        match self {
            View::Loading => "views/loading.html",
            View::InputError { .. } => "views/input_error.html",
            View::ServiceUnavailable => "views/service_unavailable.html",
            View::Connected => "views/connected.html",
            View::Found { .. } => "views/found.html",
            View::NotFound { .. } => "views/not_found.html",
            View::Suggestions { .. } => "views/suggestions.html",
            View::NoSuggestions { .. } => "views/no_suggestions.html",
            View::Corrections { .. } => "views/corrections.html",
            View::NoCorrections { .. } => "views/no_corrections.html",
        }
    }

    pub fn suggestion_list(prefix: &str, suggestions: Vec<String>) -> Self {
        if suggestions.is_empty() {
            View::NoSuggestions { prefix: prefix.to_string() }
        } else {
            View::Suggestions { prefix: prefix.to_string(), suggestions }
        }
    }

    pub fn correction_list(word: &str, corrections: Vec<String>) -> Self {
        if corrections.is_empty() {
            View::NoCorrections { word: word.to_string() }
        } else {
            View::Corrections { word: word.to_string(), corrections }
        }
    }
}
