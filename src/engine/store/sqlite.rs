use crate::engine::errors::ReportError;
use crate::engine::store::value::render_value;
use crate::engine::store::{DatabaseGateway, Row};
use crate::shared::config::DatabaseConfig;
use rusqlite::{Connection, OpenFlags};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Gateway over a SQLite database file.
///
/// Each call opens its own read-only connection and drops it before
/// returning, so nothing is shared between reports.
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    connection_string: String,
    busy_timeout: Duration,
}

impl SqliteGateway {
    pub fn new(connection_string: &str) -> Result<Self, ReportError> {
        if connection_string.trim().is_empty() {
            return Err(ReportError::Configuration(
                "Instance property 'connection_string' wasn't configured properly.".to_string(),
            ));
        }
        Ok(Self {
            connection_string: connection_string.to_string(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        })
    }

    pub fn from_config(cfg: &DatabaseConfig) -> Result<Self, ReportError> {
        Ok(Self::new(&cfg.connection_string)?
            .with_busy_timeout(Duration::from_millis(cfg.busy_timeout_ms)))
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    fn open(&self) -> rusqlite::Result<Connection> {
        // Read-only: a missing database is an error, never an empty new file.
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&self.connection_string, flags)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }
}

impl DatabaseGateway for SqliteGateway {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ReportError> {
        let conn = self
            .open()
            .map_err(|e| ReportError::data_access("open", e))?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| ReportError::data_access("prepare", e))?;
        let width = stmt.column_count();

        let mut rows = stmt
            .query([])
            .map_err(|e| ReportError::data_access("execute", e))?;
        let mut out = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| ReportError::data_access("fetch", e))?
        {
            let mut values = Vec::with_capacity(width);
            for idx in 0..width {
                let value = row
                    .get_ref(idx)
                    .map_err(|e| ReportError::data_access("fetch", e))?;
                values.push(render_value(value));
            }
            out.push(values);
        }

        debug!(
            target: "customer_report::store",
            rows = out.len(),
            columns = width,
            "Query returned"
        );
        Ok(out)
    }
}
