use crate::engine::schema::{AttributeRegistry, CUSTOMER_TABLE};
use crate::test_helpers::factories::RegistryFactory;
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A throwaway SQLite database holding a customer table.
pub struct CustomerDb {
    _dir: TempDir,
    path: PathBuf,
}

impl CustomerDb {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connection_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

pub struct CustomerDbFactory {
    registry: Arc<AttributeRegistry>,
    table: String,
    rows: Vec<Vec<(String, Value)>>,
}

impl CustomerDbFactory {
    /// Table shaped after `RegistryFactory::new()`.
    pub fn new() -> Self {
        Self {
            registry: RegistryFactory::new().create_shared(),
            table: CUSTOMER_TABLE.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn with_registry(mut self, registry: Arc<AttributeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    pub fn with_row(mut self, values: &[(&str, Value)]) -> Self {
        self.rows.push(
            values
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        );
        self
    }

    pub fn with_customer(self, gender: &str, age: i64, money_spent: i64) -> Self {
        self.with_row(&[
            ("F_CU_GENDER", Value::Text(gender.to_string())),
            ("F_CU_AGE", Value::Integer(age)),
            ("F_CU_MONEYSPENT", Value::Integer(money_spent)),
        ])
    }

    pub fn create(self) -> CustomerDb {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.db");
        let conn = Connection::open(&path).unwrap();

        let columns: Vec<String> = self
            .registry
            .attributes()
            .map(|a| {
                let affinity = if a.is_numeric { "NUMERIC" } else { "TEXT" };
                format!("{} {}", a.name, affinity)
            })
            .collect();
        conn.execute_batch(&format!(
            "CREATE TABLE {} ({});",
            self.table,
            columns.join(", ")
        ))
        .unwrap();

        for row in &self.rows {
            let names: Vec<&str> = row.iter().map(|(k, _)| k.as_str()).collect();
            let placeholders = vec!["?"; row.len()].join(", ");
            let sql = format!(
                "INSERT INTO {} ({}) VALUES ({})",
                self.table,
                names.join(", "),
                placeholders
            );
            conn.execute(&sql, params_from_iter(row.iter().map(|(_, v)| v)))
                .unwrap();
        }

        CustomerDb { _dir: dir, path }
    }
}
