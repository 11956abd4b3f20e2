//! # sieve-core
//!
//! Foundation crate for cluster annotation triage.
//! Defines the shared types, the label repository trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SieveConfig;
pub use errors::{SieveError, SieveResult};
pub use models::{ClusterLabel, ClusterTransport, FamilyKey, RecordId, SessionId};
pub use traits::ILabelRepository;
