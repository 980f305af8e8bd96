use crate::engine::errors::ReportError;
use crate::engine::schema::registry::{AttributeRegistry, FIELD_PREFIX};
use std::fmt;

/// An attribute name proven to exist in the registry it was validated against.
///
/// Only [`FieldValidator::normalize`] can produce one, so anything holding a
/// `ValidatedField` may use it as a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedField(String);

impl ValidatedField {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidatedField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct FieldValidator<'a> {
    registry: &'a AttributeRegistry,
}

impl<'a> FieldValidator<'a> {
    pub fn new(registry: &'a AttributeRegistry) -> Self {
        Self { registry }
    }

    /// Maps caller input such as `gender` or `F_CU_GENDER` onto a registry name.
    ///
    /// Input is trimmed and upper-cased; the `F_CU_` prefix is added when
    /// missing. Blank input fails with `InvalidInput`, names outside the
    /// registry with `UnknownField` carrying the untouched input.
    pub fn normalize(&self, raw: &str) -> Result<ValidatedField, ReportError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReportError::InvalidInput { param: "field" });
        }

        let upper = trimmed.to_ascii_uppercase();
        let name = if upper.starts_with(FIELD_PREFIX) {
            upper
        } else {
            format!("{FIELD_PREFIX}{upper}")
        };

        if !self.registry.contains(&name) {
            return Err(ReportError::UnknownField {
                raw: raw.to_string(),
            });
        }
        Ok(ValidatedField(name))
    }
}
