pub mod filters;
pub mod listing;
pub mod matching;
pub mod query;
pub mod time_serde;
