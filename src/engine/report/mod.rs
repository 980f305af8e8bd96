pub mod csv_writer;
pub mod matrix;
pub mod summary;
pub mod transpose;

pub use csv_writer::{CsvReportWriter, ReportArtifact};
pub use matrix::TransposedMatrix;
pub use summary::ReportService;
pub use transpose::{transpose, transpose_labelled};
