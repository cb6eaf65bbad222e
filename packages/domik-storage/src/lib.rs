pub mod catalog;
pub mod db;
pub mod listings;
pub mod schema;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
