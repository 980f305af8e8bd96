use chrono::{Local, NaiveDateTime};

/// Millisecond-resolution stamp used in report file names.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

/// `<prefix>_<yyyyMMddHHmmssfff>.<extension>`
pub fn stamped_file_name(prefix: &str, extension: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.{}", prefix, at.format(FILE_STAMP_FORMAT), extension)
}

/// Same as [`stamped_file_name`], stamped with the local wall clock.
pub fn stamped_file_name_now(prefix: &str, extension: &str) -> String {
    stamped_file_name(prefix, extension, Local::now().naive_local())
}
