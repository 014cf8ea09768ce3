use reqwest::StatusCode;
use thiserror::Error;

/// Empty input for one of the three actions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a word to search")]
    EmptyWord,
    #[error("Please enter a prefix for suggestions")]
    EmptyPrefix,
    #[error("Please enter a word for spell checking")]
    EmptySpellCheck,
}

/// Anything that keeps a dictionary response from reaching the page.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ServiceError {
    pub fn decode(err: reqwest::Error) -> Self {
        ServiceError::Decode(err.to_string())
    }
}
