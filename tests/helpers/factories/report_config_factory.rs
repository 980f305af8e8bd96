use crate::shared::config::{LineEnding, ReportConfig};
use std::path::Path;

pub struct ReportConfigFactory {
    config: ReportConfig,
}

impl ReportConfigFactory {
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
        }
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = dir.as_ref().to_string_lossy().into_owned();
        self
    }

    pub fn with_file_prefix(mut self, prefix: &str) -> Self {
        self.config.file_prefix = prefix.to_string();
        self
    }

    pub fn with_table(mut self, table: &str) -> Self {
        self.config.table = table.to_string();
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    pub fn labelled(mut self) -> Self {
        self.config.label_groups = true;
        self
    }

    pub fn create(self) -> ReportConfig {
        self.config
    }
}
