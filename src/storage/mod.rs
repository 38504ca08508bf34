mod repository;

pub use repository::*;

/// Record file used when no path is configured.
pub const DEFAULT_RECORDS_PATH: &str = "student_records.json";
