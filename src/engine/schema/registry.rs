use crate::engine::errors::ReportError;
use crate::engine::schema::types::{Attribute, is_plain_identifier};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Naming prefix shared by every customer attribute.
pub const FIELD_PREFIX: &str = "F_CU_";

/// Table holding one row per customer.
pub const CUSTOMER_TABLE: &str = "T_CUSTOMER";

const CUSTOMER_ATTRIBUTES: &[(&str, bool)] = &[
    ("F_CU_FIRSTNAME", false),
    ("F_CU_LASTNAME", false),
    ("F_CU_EMAIL", false),
    ("F_CU_MOBILE", false),
    ("F_CU_ACCEPT_EMAIL", false),
    ("F_CU_ACCEPT_PHONE", false),
    ("F_CU_ACCEPT_FACEBOOK", false),
    ("F_CU_AGE", true),
    ("F_CU_GENDER", false),
    ("F_CU_ZIP", false),
    ("F_CU_COUNTRY", false),
    ("F_CU_CITY", false),
    ("F_CU_CREATED", false),
    ("F_CU_BIRTHDATE", false),
    ("F_CU_PRODUCT_GROUP", false),
    ("F_CU_RACES", true),
    ("F_CU_MONEYSPENT", true),
    ("F_CU_LAST_VISIT", false),
    ("F_CU_LAST_VISIT_MONTHS_AGO", true),
    ("F_CU_FIRST_VISIT_MONTHS_AGO", true),
    ("F_CU_CREATED_YEAR", true),
    ("F_CU_CREATED_QUARTER", false),
    ("F_CU_CREATED_MONTH", false),
    ("F_CU_CREATED_WEEKDAY", true),
    ("F_CU_HAS_EMAIL", false),
    ("F_CU_HAS_PHONE", false),
    ("F_CU_HAS_FACEBOOK", false),
    ("F_CU_DAYS_RACED", true),
    ("F_CU_CREATED_WEEK", true),
    ("F_CU_DISTANCE", true),
    ("F_CU_CUSTOMER_ID", false),
    ("F_CU_CREATED_TIME_OF_DAY", false),
    ("F_CU_FRIENDS_COUNT", true),
];

static CUSTOMER_REGISTRY: Lazy<Arc<AttributeRegistry>> = Lazy::new(|| {
    let attributes = CUSTOMER_ATTRIBUTES
        .iter()
        .map(|&(name, is_numeric)| {
            (
                name.to_string(),
                Attribute {
                    name: name.to_string(),
                    is_numeric,
                },
            )
        })
        .collect();
    Arc::new(AttributeRegistry { attributes })
});

/// Closed, ordered set of attributes a report may group by or sum.
///
/// Iteration follows declaration order, which fixes the column order of every
/// generated query and report.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRegistry {
    attributes: IndexMap<String, Attribute>,
}

impl AttributeRegistry {
    /// Builds a registry from an explicit attribute list.
    ///
    /// Names must be upper-case plain identifiers and unique; anything else
    /// could not be spliced into a query safely.
    pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Result<Self, ReportError> {
        let mut map = IndexMap::new();
        for attribute in attributes {
            if !is_plain_identifier(&attribute.name)
                || attribute.name != attribute.name.to_ascii_uppercase()
            {
                return Err(ReportError::Configuration(format!(
                    "Attribute name '{}' is not an upper-case SQL identifier",
                    attribute.name
                )));
            }
            if map.contains_key(&attribute.name) {
                return Err(ReportError::Configuration(format!(
                    "Attribute '{}' is declared twice",
                    attribute.name
                )));
            }
            map.insert(attribute.name.clone(), attribute);
        }
        Ok(Self { attributes: map })
    }

    /// The built-in customer attribute table.
    pub fn customer() -> Arc<AttributeRegistry> {
        Arc::clone(&CUSTOMER_REGISTRY)
    }

    pub fn is_numeric(&self, name: &str) -> Option<bool> {
        self.attributes.get(name).map(|a| a.is_numeric)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn numeric_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values().filter(|a| a.is_numeric)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
