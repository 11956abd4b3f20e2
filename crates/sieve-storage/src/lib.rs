//! # sieve-storage
//!
//! SQLite persistence for per-record labels and families, scoped by labeling session.
//! [`LabelStore`] implements [`sieve_core::ILabelRepository`].

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::LabelStore;

use sieve_core::errors::{SieveError, StorageError};

/// Wrap a SQLite failure message as a storage error.
pub(crate) fn to_storage_err(message: String) -> SieveError {
    StorageError::SqliteError { message }.into()
}
