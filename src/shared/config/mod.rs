pub mod model;

pub use model::{
    DatabaseConfig, LineEnding, LoggingConfig, ReportConfig, Settings, load_settings,
    load_settings_from,
};
