//! Command-facing error envelope for SimetricGym
//!
//! Commands return a serializable error with a stable kind string so the
//! frontend can tell a duplicate cedula apart from a generic storage failure.

use crate::db::DbError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error kinds for frontend handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unique-key conflict on insert (duplicate cedula)
    ConstraintViolation,
    /// Any other database failure
    Storage,
    /// Command invoked before `initialize_app`
    NotInitialized,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::Storage => write!(f, "storage"),
            Self::NotInitialized => write!(f, "not_initialized"),
        }
    }
}

/// Error payload returned to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(ErrorKind::NotInitialized, "Database not initialized")
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl From<DbError> for CommandError {
    fn from(err: DbError) -> Self {
        let kind = match err {
            DbError::DuplicateCedula => ErrorKind::ConstraintViolation,
            DbError::NotInitialized => ErrorKind::NotInitialized,
            _ => ErrorKind::Storage,
        };
        Self::new(kind, err.to_string())
    }
}
