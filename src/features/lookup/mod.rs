pub mod client;
pub mod errors;

pub use client::DictionaryClient;
pub use errors::{InputError, ServiceError};
