pub mod errors;
pub mod query;
pub mod report;
pub mod schema;
pub mod store;

pub use errors::*;
