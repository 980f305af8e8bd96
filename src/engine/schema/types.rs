use serde::{Deserialize, Serialize};

/// A column of the customer table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub is_numeric: bool,
}

impl Attribute {
    /// Numeric attribute that can be summed.
    pub fn measure(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_numeric: true,
        }
    }

    /// Categorical attribute, usable only as a grouping key.
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_numeric: false,
        }
    }
}

/// True for names safe to splice into SQL unquoted: an ASCII letter followed
/// by ASCII letters, digits or underscores.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
