use rusqlite::types::ValueRef;

/// Renders a column value the way it appears in a report cell.
///
/// Integers print in decimal, reals in their shortest form (`3.0` prints as
/// `3`), NULL as an empty cell and blobs as lower-case hex.
pub fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => itoa::Buffer::new().format(i).to_owned(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => hex::encode(bytes),
    }
}
