#[allow(clippy::module_inception)]
mod search;

pub use search::{
    corrections_page, home, not_found, search_page, select_word, suggestions_page, UiState,
};
