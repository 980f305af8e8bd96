use crate::engine::errors::ReportError;
use crate::engine::report::matrix::TransposedMatrix;
use crate::engine::store::Row;
use tracing::error;

/// Rotates one-row-per-group results into one row per measure.
///
/// Output row `i` is `header[i]` followed by `rows[0][i] .. rows[R-1][i]`.
/// With no rows every output row holds only its label.
pub fn transpose(header: &[String], rows: &[Row]) -> Result<TransposedMatrix, ReportError> {
    check_shape(header.len(), rows)?;

    let out = header
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut line = Vec::with_capacity(rows.len() + 1);
            line.push(label.clone());
            line.extend(rows.iter().map(|row| row[i].clone()));
            line
        })
        .collect();
    Ok(TransposedMatrix::from_rows(out))
}

/// Like [`transpose`] for rows whose first value is the group they belong to.
///
/// The result starts with `group_by, g0, g1, ..` so every column is labelled
/// with its group instead of relying on row order.
pub fn transpose_labelled(
    group_by: &str,
    header: &[String],
    rows: &[Row],
) -> Result<TransposedMatrix, ReportError> {
    check_shape(header.len() + 1, rows)?;

    let mut labels = Vec::with_capacity(rows.len() + 1);
    labels.push(group_by.to_string());
    labels.extend(rows.iter().map(|row| row[0].clone()));

    let measures: Vec<Row> = rows.iter().map(|row| row[1..].to_vec()).collect();
    let mut out = vec![labels];
    out.extend(transpose(header, &measures)?.into_rows());
    Ok(TransposedMatrix::from_rows(out))
}

fn check_shape(expected: usize, rows: &[Row]) -> Result<(), ReportError> {
    if let Some((idx, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != expected)
    {
        let err = ReportError::ShapeMismatch {
            row: idx,
            expected,
            actual: row.len(),
        };
        error!(
            target: "customer_report::transpose",
            row = idx,
            expected,
            actual = row.len(),
            "Result row width disagrees with the summed attributes"
        );
        return Err(err);
    }
    Ok(())
}
