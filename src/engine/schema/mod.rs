pub mod normalization;
pub mod registry;
pub mod types;

pub use normalization::{FieldValidator, ValidatedField};
pub use registry::{AttributeRegistry, CUSTOMER_TABLE, FIELD_PREFIX};
pub use types::{Attribute, is_plain_identifier};
