pub mod builder;

pub use builder::{AggregateQuery, AggregateQueryBuilder};
