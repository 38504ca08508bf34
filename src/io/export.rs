use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::RecordService;
use crate::domain::Student;

/// Snapshot of the record file for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub students: Vec<Student>,
}

/// Exporter for converting student records to various formats
pub struct Exporter<'a> {
    service: &'a RecordService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a RecordService) -> Self {
        Self { service }
    }

    /// Export students to CSV format
    pub fn export_students_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let students = self.service.list_students()?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["student_id", "name", "age", "grade"])?;

        for student in &students {
            csv_writer.write_record([
                student.student_id.to_string(),
                student.name.clone(),
                student.age.to_string(),
                student.grade.clone(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(students.len())
    }

    /// Export every student as a versioned JSON snapshot
    pub fn export_students_json<W: Write>(&self, mut writer: W) -> Result<RecordSnapshot> {
        let snapshot = RecordSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            students: self.service.list_students()?,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
