pub mod sqlite;
pub mod value;

use crate::engine::errors::ReportError;

pub use sqlite::SqliteGateway;

/// One result row, values rendered as strings in select-list order.
pub type Row = Vec<String>;

/// Executes a single read statement and returns every row it yields.
///
/// Failures of any kind surface as `ReportError::DataAccess`; callers never
/// retry.
pub trait DatabaseGateway {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ReportError>;
}

impl<G: DatabaseGateway + ?Sized> DatabaseGateway for &G {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ReportError> {
        (**self).execute(sql)
    }
}

impl<G: DatabaseGateway + ?Sized> DatabaseGateway for Box<G> {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ReportError> {
        (**self).execute(sql)
    }
}
