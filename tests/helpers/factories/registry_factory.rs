use crate::engine::schema::{Attribute, AttributeRegistry};
use std::sync::Arc;

pub struct RegistryFactory {
    attributes: Vec<Attribute>,
}

impl RegistryFactory {
    /// Gender (categorical), age and money spent (numeric).
    pub fn new() -> Self {
        Self {
            attributes: vec![
                Attribute::category("F_CU_GENDER"),
                Attribute::measure("F_CU_AGE"),
                Attribute::measure("F_CU_MONEYSPENT"),
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    pub fn with_measure(mut self, name: &str) -> Self {
        self.attributes.push(Attribute::measure(name));
        self
    }

    pub fn with_category(mut self, name: &str) -> Self {
        self.attributes.push(Attribute::category(name));
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn create(self) -> AttributeRegistry {
        AttributeRegistry::new(self.attributes).expect("factory attributes must be valid")
    }

    pub fn create_shared(self) -> Arc<AttributeRegistry> {
        Arc::new(self.create())
    }
}
