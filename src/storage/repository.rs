use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::domain::Student;

/// Flat JSON file holding every student record.
///
/// The whole file is read on each query and rewritten on each change.
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Point the repository at `path`. The file is created on first save.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Student>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "record file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read record file: {}", self.path.display())
                });
            }
        };

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse record file: {}", self.path.display()))
    }

    /// Replace the file contents with `records`, pretty-printed with a
    /// four-space indent.
    pub fn save(&self, records: &[Student]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .context("Failed to serialize student records")?;

        fs::write(&self.path, buf)
            .with_context(|| format!("Failed to write record file: {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}
