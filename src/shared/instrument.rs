use crate::engine::errors::ReportError;
use serde_json::Value;
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Error types that [`traced`] can log.
pub trait TracedError: fmt::Display {
    /// Caller mistakes are logged at warn, everything else at error.
    fn is_caller_mistake(&self) -> bool {
        false
    }
}

impl TracedError for ReportError {
    fn is_caller_mistake(&self) -> bool {
        self.is_input_error()
    }
}

impl TracedError for String {}

/// Runs `call` between structured entry and exit records for `operation`.
///
/// Entry is logged at debug level with `args` rendered as JSON. Success logs
/// the elapsed time and the returned value at debug level, failure logs the
/// elapsed time and the error at error level, or at warn for caller
/// mistakes. The result is handed back untouched.
pub fn traced<T, E, F>(operation: &str, args: Value, call: F) -> Result<T, E>
where
    T: fmt::Debug,
    E: TracedError,
    F: FnOnce() -> Result<T, E>,
{
    debug!(target: "customer_report::trace", operation, args = %args, "Entering {operation}");
    let start = Instant::now();

    let result = call();

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    match &result {
        Ok(value) => debug!(
            target: "customer_report::trace",
            operation,
            elapsed_ms,
            returned = ?value,
            "Exiting {operation}"
        ),
        Err(err) if err.is_caller_mistake() => warn!(
            target: "customer_report::trace",
            operation,
            elapsed_ms,
            error = %err,
            "Rejected in {operation}"
        ),
        Err(err) => error!(
            target: "customer_report::trace",
            operation,
            elapsed_ms,
            error = %err,
            "Error in {operation}"
        ),
    }
    result
}
