use crate::engine::errors::ReportError;
use crate::engine::query::AggregateQueryBuilder;
use crate::engine::report::csv_writer::CsvReportWriter;
use crate::engine::report::transpose::{transpose, transpose_labelled};
use crate::engine::schema::{AttributeRegistry, FieldValidator};
use crate::engine::store::{DatabaseGateway, SqliteGateway};
use crate::shared::config::{ReportConfig, Settings};
use crate::shared::instrument::traced;
use crate::shared::time::stamped_file_name_now;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Produces sum-by-group CSV reports over the customer table.
pub struct ReportService<G> {
    registry: Arc<AttributeRegistry>,
    gateway: G,
    config: ReportConfig,
}

impl ReportService<SqliteGateway> {
    /// Service over the built-in customer registry and the configured SQLite
    /// database. Fails with `Configuration` before any I/O when a required
    /// setting is missing or blank.
    pub fn from_settings(settings: &Settings) -> Result<Self, ReportError> {
        let gateway = SqliteGateway::from_config(&settings.database)?;
        Self::new(
            AttributeRegistry::customer(),
            gateway,
            settings.report.clone(),
        )
    }
}

impl<G: DatabaseGateway> ReportService<G> {
    pub fn new(
        registry: Arc<AttributeRegistry>,
        gateway: G,
        config: ReportConfig,
    ) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self {
            registry,
            gateway,
            config,
        })
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Sums every numeric attribute grouped by `field`, writes the transposed
    /// result as CSV and returns the file path.
    ///
    /// The output directory is created first; the first failing step aborts
    /// the run and no file is left behind. The returned path carries a `_<n>`
    /// suffix when another report claimed the stamped name first.
    pub fn summary(&self, field: &str) -> Result<PathBuf, ReportError> {
        traced("ReportService::summary", json!({ "field": field }), || {
            let path = traced(
                "ReportService::allocate_output_path",
                json!({ "output_dir": self.config.output_dir }),
                || self.allocate_output_path(),
            )?;

            let group_by = traced(
                "FieldValidator::normalize",
                json!({ "field": field }),
                || FieldValidator::new(&self.registry).normalize(field),
            )?;

            let query = traced(
                "AggregateQueryBuilder::build",
                json!({ "group_by": group_by.as_str(), "table": self.config.table }),
                || {
                    AggregateQueryBuilder::new(&self.registry, &self.config.table)?
                        .label_groups(self.config.label_groups)
                        .build(&group_by)
                },
            )?;

            let rows = traced(
                "DatabaseGateway::execute",
                json!({ "sql": query.sql() }),
                || self.gateway.execute(query.sql()),
            )?;

            let header = query.measure_names();
            let matrix = traced(
                "ResultTransposer::transpose",
                json!({ "header": header, "rows": rows.len() }),
                || {
                    if query.is_labelled() {
                        transpose_labelled(group_by.as_str(), &header, &rows)
                    } else {
                        transpose(&header, &rows)
                    }
                },
            )?;

            let artifact = traced(
                "CsvReportWriter::write",
                json!({ "path": path.display().to_string(), "rows": matrix.row_count() }),
                || CsvReportWriter::new(self.config.line_ending).write(&matrix, &path),
            )?;

            match artifact {
                Some(artifact) => {
                    info!(
                        target: "customer_report::summary",
                        group_by = %group_by,
                        groups = rows.len(),
                        rows = artifact.rows,
                        bytes = artifact.bytes,
                        path = %artifact.path.display(),
                        "Summary report written"
                    );
                    Ok(artifact.path)
                }
                None => Ok(path),
            }
        })
    }

    fn allocate_output_path(&self) -> Result<PathBuf, ReportError> {
        let dir = Path::new(&self.config.output_dir);
        fs::create_dir_all(dir).map_err(|source| ReportError::Filesystem {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(dir.join(stamped_file_name_now(&self.config.file_prefix, "csv")))
    }
}
