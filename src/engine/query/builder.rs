use crate::engine::errors::ReportError;
use crate::engine::schema::{Attribute, AttributeRegistry, ValidatedField, is_plain_identifier};
use tracing::debug;

/// Sum-by-group statement derived from a validated grouping field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateQuery {
    summed_attributes: Vec<Attribute>,
    group_by: ValidatedField,
    labelled: bool,
    sql: String,
}

impl AggregateQuery {
    /// Measures in registry order; this is the column order of every result row.
    pub fn summed_attributes(&self) -> &[Attribute] {
        &self.summed_attributes
    }

    pub fn measure_names(&self) -> Vec<String> {
        self.summed_attributes
            .iter()
            .map(|a| a.name.clone())
            .collect()
    }

    pub fn group_by(&self) -> &ValidatedField {
        &self.group_by
    }

    /// Whether the grouping column is selected ahead of the sums.
    pub fn is_labelled(&self) -> bool {
        self.labelled
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }
}

pub struct AggregateQueryBuilder<'a> {
    registry: &'a AttributeRegistry,
    table: &'a str,
    label_groups: bool,
}

impl<'a> AggregateQueryBuilder<'a> {
    pub fn new(registry: &'a AttributeRegistry, table: &'a str) -> Result<Self, ReportError> {
        if !is_plain_identifier(table) {
            return Err(ReportError::Configuration(format!(
                "Table name '{}' is not a plain SQL identifier",
                table
            )));
        }
        Ok(Self {
            registry,
            table,
            label_groups: false,
        })
    }

    /// Also select the grouping column so every result row names its group.
    pub fn label_groups(mut self, enabled: bool) -> Self {
        self.label_groups = enabled;
        self
    }

    /// Builds `SELECT SUM(a1), SUM(a2), ... FROM <table> GROUP BY <group_by>`.
    ///
    /// Every numeric attribute except `group_by` is summed. Identifiers come
    /// from the registry and the checked table name only.
    pub fn build(&self, group_by: &ValidatedField) -> Result<AggregateQuery, ReportError> {
        let summed_attributes: Vec<Attribute> = self
            .registry
            .numeric_attributes()
            .filter(|a| a.name != group_by.as_str())
            .cloned()
            .collect();

        if summed_attributes.is_empty() {
            return Err(ReportError::NoMeasures {
                group_by: group_by.to_string(),
            });
        }

        let sums = summed_attributes
            .iter()
            .map(|a| format!("SUM({})", a.name))
            .collect::<Vec<_>>()
            .join(", ");
        let select = if self.label_groups {
            format!("{}, {}", group_by, sums)
        } else {
            sums
        };
        let sql = format!(
            "SELECT {} FROM {} GROUP BY {}",
            select, self.table, group_by
        );

        debug!(
            target: "customer_report::query",
            group_by = %group_by,
            measures = summed_attributes.len(),
            labelled = self.label_groups,
            "Built aggregate query"
        );

        Ok(AggregateQuery {
            summed_attributes,
            group_by: group_by.clone(),
            labelled: self.label_groups,
            sql,
        })
    }
}
