pub mod controller;
pub mod handles;
pub mod templates;

pub use controller::SearchUi;
pub use handles::{InputHandle, ResultsArea, ResultsHandle, TextInput};
