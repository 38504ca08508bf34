use std::path::Path;

use tracing::{info, warn};

use crate::domain::{Student, StudentId, StudentLookup, StudentUpdate};
use crate::storage::Repository;

use super::AppError;

/// Application service for the student record file.
/// This is the primary interface for any client (CLI, tests, scripts).
pub struct RecordService {
    repo: Repository,
}

impl RecordService {
    /// Create a new record service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Open the record file at the given path.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(Repository::open(path))
    }

    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    // ========================
    // Student operations
    // ========================

    /// Append a new student and persist the file.
    pub fn add_student(
        &self,
        student_id: StudentId,
        name: String,
        age: u32,
        grade: String,
    ) -> Result<Student, AppError> {
        let mut records = self.repo.load()?;

        if records.iter().any(|s| s.student_id == student_id) {
            warn!(student_id, "student id already taken");
            return Err(AppError::StudentAlreadyExists(student_id));
        }

        let student = Student::new(student_id, name, age, grade);
        records.push(student.clone());
        self.repo.save(&records)?;

        info!(student_id, name = %student.name, "added student");
        Ok(student)
    }

    /// Append several students with a single rewrite of the file.
    ///
    /// Either every student is stored or none is; a taken id rejects the batch.
    pub fn add_students(&self, students: Vec<Student>) -> Result<usize, AppError> {
        let mut records = self.repo.load()?;

        for student in &students {
            if records.iter().any(|s| s.student_id == student.student_id) {
                warn!(student_id = student.student_id, "student id already taken");
                return Err(AppError::StudentAlreadyExists(student.student_id));
            }
            records.push(student.clone());
        }

        self.repo.save(&records)?;
        info!(count = students.len(), "added students");
        Ok(students.len())
    }

    /// Find the first student matching `lookup`.
    pub fn find_student(&self, lookup: &StudentLookup) -> Result<Option<Student>, AppError> {
        let records = self.repo.load()?;
        Ok(records.into_iter().find(|s| lookup.matches(s)))
    }

    /// Get a student, failing when none matches.
    pub fn get_student(&self, lookup: &StudentLookup) -> Result<Student, AppError> {
        self.find_student(lookup)?
            .ok_or_else(|| AppError::StudentNotFound(lookup.to_string()))
    }

    /// Change age and/or grade of the first student matching `lookup`.
    pub fn update_student(
        &self,
        lookup: &StudentLookup,
        update: &StudentUpdate,
    ) -> Result<Student, AppError> {
        let mut records = self.repo.load()?;

        let Some(student) = records.iter_mut().find(|s| lookup.matches(s)) else {
            warn!(%lookup, "student not found");
            return Err(AppError::StudentNotFound(lookup.to_string()));
        };

        student.apply(update);
        let updated = student.clone();
        self.repo.save(&records)?;

        info!(student_id = updated.student_id, "updated student");
        Ok(updated)
    }

    /// List all students in file order.
    pub fn list_students(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.repo.load()?)
    }
}
