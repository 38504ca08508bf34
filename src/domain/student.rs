use serde::{Deserialize, Serialize};

pub type StudentId = u32;

/// A single row of the student record file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId,
    pub name: String,
    pub age: u32,
    pub grade: String,
}

impl Student {
    pub fn new(student_id: StudentId, name: String, age: u32, grade: String) -> Self {
        Self {
            student_id,
            name,
            age,
            grade,
        }
    }

    /// Apply the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: &StudentUpdate) {
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(grade) = &update.grade {
            self.grade = grade.clone();
        }
    }
}

/// How to locate a student in the record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentLookup {
    Id(StudentId),
    Name(String),
}

impl StudentLookup {
    pub fn matches(&self, student: &Student) -> bool {
        match self {
            StudentLookup::Id(id) => student.student_id == *id,
            StudentLookup::Name(name) => student.name == *name,
        }
    }
}

impl std::fmt::Display for StudentLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentLookup::Id(id) => write!(f, "id {}", id),
            StudentLookup::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// Fields that may change on an existing student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub age: Option<u32>,
    pub grade: Option<String>,
}

impl StudentUpdate {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.grade.is_none()
    }
}
