use anyhow::Result;
use std::collections::HashSet;
use std::io::Read;

use crate::application::{AppError, RecordService};
use crate::domain::Student;

/// Result of an import operation
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
}

/// Error that occurred during import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub error: String,
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Parse and check rows without writing anything
    pub dry_run: bool,
    /// Skip rows whose student id is already taken instead of reporting them
    pub skip_duplicates: bool,
}

/// Importer for loading CSV rows into the record file
pub struct Importer<'a> {
    service: &'a RecordService,
}

impl<'a> Importer<'a> {
    pub fn new(service: &'a RecordService) -> Self {
        Self { service }
    }

    /// Import students from CSV with a `student_id,name,age,grade` header.
    pub fn import_students_csv<R: Read>(
        &self,
        reader: R,
        options: &ImportOptions,
    ) -> Result<ImportResult> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut result = ImportResult::default();
        let mut accepted = Vec::new();
        let mut taken: HashSet<_> = self
            .service
            .list_students()?
            .into_iter()
            .map(|s| s.student_id)
            .collect();

        for (line_num, row) in csv_reader.deserialize::<Student>().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing

            let student = match row {
                Ok(student) => student,
                Err(e) => {
                    result.errors.push(ImportError {
                        line,
                        error: format!("CSV parse error: {}", e),
                    });
                    continue;
                }
            };

            if taken.contains(&student.student_id) {
                if options.skip_duplicates {
                    result.skipped += 1;
                } else {
                    result.errors.push(ImportError {
                        line,
                        error: AppError::StudentAlreadyExists(student.student_id).to_string(),
                    });
                }
                continue;
            }

            taken.insert(student.student_id);
            accepted.push(student);
        }

        result.imported = accepted.len();
        if !options.dry_run && !accepted.is_empty() {
            self.service.add_students(accepted)?;
        }

        Ok(result)
    }
}
