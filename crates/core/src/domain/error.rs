// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid screen status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Screen not found: {0}")]
    ScreenNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
