use thiserror::Error;

use crate::domain::{LedgerError, StudentId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Cart is empty, nothing to check out")]
    EmptyCart,

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Restaurant already exists: {0}")]
    RestaurantAlreadyExists(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Student already exists with id {0}")]
    StudentAlreadyExists(StudentId),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
