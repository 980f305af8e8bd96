use crate::engine::errors::ReportError;
use crate::engine::schema::{CUSTOMER_TABLE, is_plain_identifier};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path or `file:` URI of the customer database. Blank is rejected when
    /// the gateway is built.
    #[serde(default)]
    pub connection_string: String,
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: String,
    pub file_prefix: String,
    pub table: String,
    pub line_ending: LineEnding,
    /// Select the grouping column too and emit it as the first report row.
    pub label_groups: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: "output".to_string(),
            file_prefix: "Task1".to_string(),
            table: CUSTOMER_TABLE.to_string(),
            line_ending: LineEnding::Lf,
            label_groups: false,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), ReportError> {
        if !is_plain_identifier(&self.table) {
            return Err(ReportError::Configuration(format!(
                "Table name '{}' is not a plain SQL identifier",
                self.table
            )));
        }
        let prefix_ok = !self.file_prefix.trim().is_empty()
            && self
                .file_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !prefix_ok {
            return Err(ReportError::Configuration(format!(
                "File prefix '{}' must be non-empty and use only letters, digits, '_' or '-'",
                self.file_prefix
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

/// Loads settings from the file named by `CUSTOMER_REPORT_CONFIG`, or
/// `config.toml` in the working directory.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("CUSTOMER_REPORT_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Loads settings from `path`, then applies `CUSTOMER_REPORT__SECTION__KEY`
/// environment overrides.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix("CUSTOMER_REPORT").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
