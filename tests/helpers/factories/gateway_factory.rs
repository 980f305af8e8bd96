use crate::engine::errors::ReportError;
use crate::engine::store::{DatabaseGateway, Row};
use std::io;
use std::sync::Mutex;

/// In-memory gateway returning canned rows or a canned fault.
pub struct StubGateway {
    rows: Vec<Row>,
    fault: Option<String>,
    executed: Mutex<Vec<String>>,
}

impl StubGateway {
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl DatabaseGateway for StubGateway {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ReportError> {
        self.executed.lock().unwrap().push(sql.to_string());
        match &self.fault {
            Some(msg) => Err(ReportError::data_access(
                "execute",
                io::Error::new(io::ErrorKind::ConnectionReset, msg.clone()),
            )),
            None => Ok(self.rows.clone()),
        }
    }
}

pub struct GatewayFactory {
    rows: Vec<Row>,
    fault: Option<String>,
}

impl GatewayFactory {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            fault: None,
        }
    }

    pub fn with_row(mut self, values: &[&str]) -> Self {
        self.rows
            .push(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn with_rows(mut self, rows: &[&[&str]]) -> Self {
        for row in rows {
            self = self.with_row(row);
        }
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fault = Some(message.to_string());
        self
    }

    pub fn create(self) -> StubGateway {
        StubGateway {
            rows: self.rows,
            fault: self.fault,
            executed: Mutex::new(Vec::new()),
        }
    }
}
