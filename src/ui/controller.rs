use tera::Tera;

use crate::data::models::{Query, View};
use crate::features::lookup::{DictionaryClient, InputError, ServiceError};
use crate::ui::handles::{InputHandle, ResultsHandle};
use crate::ui::templates::render_view;

/// Binds the search input to the three dictionary operations.
///
/// The controller owns the input and results handles it was built with and
/// is the only thing that writes to them. Each action reads the input,
/// shows the loading view, makes at most one request and replaces the
/// results with the final view, which is also returned.
pub struct SearchUi<'a, I, R> {
    client: &'a DictionaryClient,
    templates: &'a Tera,
    input: I,
    results: R,
}

impl<'a, I: InputHandle, R: ResultsHandle> SearchUi<'a, I, R> {
    pub fn new(client: &'a DictionaryClient, templates: &'a Tera, input: I, results: R) -> Self {
        Self {
            client,
            templates,
            input,
            results,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn results(&self) -> &R {
        &self.results
    }

    pub fn into_parts(self) -> (I, R) {
        (self.input, self.results)
    }

    pub async fn check_server_status(&self) -> bool {
        self.client.probe().await
    }

    /// Page-load greeting: connected, or the service-unavailable view.
    pub async fn show_server_status(&mut self) -> View {
        let view = if self.check_server_status().await {
            View::Connected
        } else {
            View::ServiceUnavailable
        };
        self.show(view)
    }

    pub async fn search_word(&mut self) -> View {
        let view = match self.begin(InputError::EmptyWord) {
            Ok(word) => self
                .lookup(&word)
                .await
                .unwrap_or_else(|e| service_unavailable("Search", e)),
            Err(view) => view,
        };
        self.show(view)
    }

    pub async fn get_auto_suggestions(&mut self) -> View {
        let view = match self.begin(InputError::EmptyPrefix) {
            Ok(prefix) => match self.client.suggestions(&prefix).await {
                Ok(suggestions) => View::suggestion_list(prefix.as_str(), suggestions),
                Err(e) => service_unavailable("Suggestions", e),
            },
            Err(view) => view,
        };
        self.show(view)
    }

    pub async fn get_spelling_corrections(&mut self) -> View {
        let view = match self.begin(InputError::EmptySpellCheck) {
            Ok(word) => match self.client.corrections(&word).await {
                Ok(corrections) => View::correction_list(word.as_str(), corrections),
                Err(e) => service_unavailable("Corrections", e),
            },
            Err(view) => view,
        };
        self.show(view)
    }

    /// Click handler of every rendered suggestion entry.
    pub async fn search_specific_word(&mut self, word: &str) -> View {
        self.input.set_value(word);
        self.search_word().await
    }

    // Empty input short-circuits to the input error view, before any request.
    fn begin(&mut self, missing: InputError) -> Result<Query, View> {
        let query = Query::parse(self.input.value()).ok_or_else(|| View::InputError {
            message: missing.to_string(),
        })?;
        self.show(View::Loading);
        Ok(query)
    }

    async fn lookup(&self, word: &Query) -> Result<View, ServiceError> {
        let result = self.client.lookup(word).await?;

        if !result.found {
            return Ok(View::NotFound {
                word: word.to_string(),
                corrections: result.corrections.unwrap_or_default(),
            });
        }

        let definition = result
            .definition
            .ok_or_else(|| ServiceError::Decode("found=true without a definition".into()))?;
        Ok(View::Found {
            word: word.as_str().to_lowercase(),
            definition,
        })
    }

    fn show(&mut self, view: View) -> View {
        self.results.set_html(render_view(self.templates, &view));
        view
    }
}

fn service_unavailable(action: &str, err: ServiceError) -> View {
    log::error!("{} error: {}", action, err);
    View::ServiceUnavailable
}
