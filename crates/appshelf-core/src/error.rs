//! Error taxonomy for registry and settings operations
//!
//! Every error here is recoverable and local to a single user action.
//! Field-level validation is reported before any state is touched, and
//! the one safety invariant in the system (the main server of a
//! collection cannot be deleted) surfaces as [`RegistryError::MainServerProtected`].

use thiserror::Error;
use uuid::Uuid;

/// Field-level input validation failure. The operation is not attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or missing
    #[error("field '{field}' is required")]
    Required { field: &'static str },

    /// A numeric field fell outside its allowed range
    #[error("field '{field}' must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: u32, max: u32 },

    /// Port did not parse as a valid TCP port number
    #[error("'{value}' is not a valid port")]
    InvalidPort { value: String },
}

/// Errors from server registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Attempted to delete the main entry of a collection. Callers must
    /// reassign main status to another entry first.
    #[error("cannot delete main server '{name}'")]
    MainServerProtected { name: String },

    /// No entry with the given id exists in the collection
    #[error("server entry {id} not found")]
    EntryNotFound { id: Uuid },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Errors from security settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
