use axum::{
    routing::{get, get_service},
    Router,
};
use tower_http::services::ServeDir;

pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod ui;
pub mod utils;

pub use config::AppConfig;
pub use features::lookup::DictionaryClient;
pub use handlers::search::UiState;

pub fn build_app(state: UiState, static_dir: &str) -> Router {
    Router::new()
        // Search page and its actions
        .route("/", get(handlers::search::home))
        .route("/search", get(handlers::search::search_page))
        .route("/suggestions", get(handlers::search::suggestions_page))
        .route("/corrections", get(handlers::search::corrections_page))
        .route("/select", get(handlers::search::select_word))
        // Static files
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .fallback(handlers::search::not_found)
        .with_state(state)
}
