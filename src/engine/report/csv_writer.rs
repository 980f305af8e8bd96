use crate::engine::errors::ReportError;
use crate::engine::report::matrix::TransposedMatrix;
use crate::shared::config::LineEnding;
use crate::shared::path::numbered_path;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A CSV file written by one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReportWriter {
    line_ending: LineEnding,
}

impl CsvReportWriter {
    pub fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    fn terminator(&self) -> Terminator {
        match self.line_ending {
            LineEnding::Lf => Terminator::Any(b'\n'),
            LineEnding::Crlf => Terminator::CRLF,
        }
    }

    /// Writes one CSV line per matrix row to `path`.
    ///
    /// Fields are quoted only when they contain a delimiter, quote or line
    /// break. Output goes to a temporary file beside `path` that is linked
    /// into place after a successful flush, so a failed write never leaves a
    /// file at `path`. An existing file is never replaced: when `path` is
    /// taken the report lands at `<stem>_<n>.<ext>` with the smallest free
    /// `n`, and the artifact carries the path actually written. An empty
    /// matrix writes nothing and returns `None`.
    pub fn write(
        &self,
        matrix: &TransposedMatrix,
        path: &Path,
    ) -> Result<Option<ReportArtifact>, ReportError> {
        if matrix.is_empty() {
            debug!(target: "customer_report::csv", path = %path.display(), "Nothing to write");
            return Ok(None);
        }

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir).map_err(|e| ReportError::csv_write(path, e))?;

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(self.terminator())
            .from_writer(tmp);
        for row in matrix.rows() {
            writer
                .write_record(row)
                .map_err(|e| ReportError::csv_write(path, e))?;
        }
        let tmp = writer
            .into_inner()
            .map_err(|e| ReportError::csv_write(path, e.into_error()))?;

        tmp.as_file()
            .sync_all()
            .map_err(|e| ReportError::csv_write(path, e))?;
        let bytes = tmp
            .as_file()
            .metadata()
            .map_err(|e| ReportError::csv_write(path, e))?
            .len();
        let written = claim(tmp, path)?;

        debug!(
            target: "customer_report::csv",
            path = %written.display(),
            rows = matrix.row_count(),
            bytes,
            "CSV written"
        );
        Ok(Some(ReportArtifact {
            path: written,
            rows: matrix.row_count(),
            bytes,
        }))
    }
}

/// Moves `tmp` to the first free numbered variant of `path`.
fn claim(mut tmp: NamedTempFile, path: &Path) -> Result<PathBuf, ReportError> {
    let mut n = 0;
    loop {
        let candidate = numbered_path(path, n);
        match tmp.persist_noclobber(&candidate) {
            Ok(_) => return Ok(candidate),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                debug!(target: "customer_report::csv", path = %candidate.display(), "Name taken");
                tmp = e.file;
                n += 1;
            }
            Err(e) => return Err(ReportError::csv_write(candidate, e.error)),
        }
    }
}
