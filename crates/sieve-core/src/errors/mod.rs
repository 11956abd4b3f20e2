//! Error types. `SieveError` is the top-level error; subsystem errors convert into it.

mod sieve_error;
mod storage_error;

pub use sieve_error::{SieveError, SieveResult};
pub use storage_error::StorageError;
