pub mod lookup_models;
pub mod view_models;

pub use lookup_models::{
    CorrectionList, LookupResult, Query, SelectParams, SuggestionList, WordParams,
};
pub use view_models::View;
