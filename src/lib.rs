pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::errors::ReportError;
pub use engine::report::ReportService;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
