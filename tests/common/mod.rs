// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use practica::application::RecordService;
use practica::domain::{FoodItem, Product};
use tempfile::TempDir;

/// Helper to create a test service with a temporary record file
pub fn test_service() -> (RecordService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("student_records.json");
    (RecordService::open(path), temp_dir)
}

/// Test fixture: the two students used throughout the exercises
pub struct StandardStudents;

impl StandardStudents {
    /// Add Armaan (id 1) and Bob (id 2)
    pub fn create(service: &RecordService) -> Result<()> {
        service.add_student(1, "Armaan".into(), 20, "A".into())?;
        service.add_student(2, "Bob".into(), 21, "B".into())?;
        Ok(())
    }
}

/// Test fixture: catalogue items
pub struct Catalogue;

impl Catalogue {
    pub fn keyboard() -> Product {
        Product::new("Keyboard", 5000).unwrap()
    }

    pub fn mouse() -> Product {
        Product::new("Mouse", 3000).unwrap()
    }

    pub fn burger() -> FoodItem {
        FoodItem::new("Burger", 800).unwrap()
    }

    pub fn pizza() -> FoodItem {
        FoodItem::new("Pizza", 1200).unwrap()
    }

    pub fn pasta() -> FoodItem {
        FoodItem::new("Pasta", 1000).unwrap()
    }
}
