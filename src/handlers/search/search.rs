use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tera::{Context, Tera};

use crate::{
    data::models::{SelectParams, WordParams},
    features::lookup::DictionaryClient,
    ui::{InputHandle, ResultsArea, ResultsHandle, SearchUi, TextInput},
    utils::render_template,
};

pub type UiState = (Arc<DictionaryClient>, Arc<Tera>);

// Page load: probe the service and greet
pub async fn home(State((client, tera)): State<UiState>) -> Html<String> {
    let mut ui = SearchUi::new(&client, &tera, TextInput::default(), ResultsArea::default());
    ui.show_server_status().await;
    render_page(&tera, ui)
}

// Enter key / search button
pub async fn search_page(
    Query(params): Query<WordParams>,
    State((client, tera)): State<UiState>,
) -> Html<String> {
    let mut ui = SearchUi::new(&client, &tera, TextInput::new(params.q), ResultsArea::default());
    ui.search_word().await;
    render_page(&tera, ui)
}

pub async fn suggestions_page(
    Query(params): Query<WordParams>,
    State((client, tera)): State<UiState>,
) -> Html<String> {
    let mut ui = SearchUi::new(&client, &tera, TextInput::new(params.q), ResultsArea::default());
    ui.get_auto_suggestions().await;
    render_page(&tera, ui)
}

pub async fn corrections_page(
    Query(params): Query<WordParams>,
    State((client, tera)): State<UiState>,
) -> Html<String> {
    let mut ui = SearchUi::new(&client, &tera, TextInput::new(params.q), ResultsArea::default());
    ui.get_spelling_corrections().await;
    render_page(&tera, ui)
}

// Click on a rendered suggestion or correction
pub async fn select_word(
    Query(params): Query<SelectParams>,
    State((client, tera)): State<UiState>,
) -> Html<String> {
    let mut ui = SearchUi::new(&client, &tera, TextInput::default(), ResultsArea::default());
    ui.search_specific_word(&params.word).await;
    render_page(&tera, ui)
}

pub async fn not_found(State((_client, tera)): State<UiState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        render_template(&tera, "404.html", Context::new()),
    )
}

fn render_page(tera: &Tera, ui: SearchUi<'_, TextInput, ResultsArea>) -> Html<String> {
    let (input, results) = ui.into_parts();
    let mut context = Context::new();
    context.insert("query", input.value());
    context.insert("results", results.html());
    render_template(tera, "search.html", context)
}
