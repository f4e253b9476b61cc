//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when an expense does not exist.
//! - [`MissingComponent`] thrown when the engine is built without a collaborator.
//! - [`Database`] wrapping any failure reported by the store.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`MissingComponent`]: EngineError::MissingComponent
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("engine built without {0}")]
    MissingComponent(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::MissingComponent(a), Self::MissingComponent(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
