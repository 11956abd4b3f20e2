//! Shared data types: identifiers, label keys, label assignments, and the
//! transport shape of a cluster.

mod cluster_label;
mod family_key;
mod label_assignment;
mod transport;

pub use cluster_label::ClusterLabel;
pub use family_key::FamilyKey;
pub use label_assignment::{LabelAssignment, LabelFamilyCounts};
pub use transport::ClusterTransport;

/// Identifier of one security-event record.
pub type RecordId = i64;

/// Identifier of a labeling session in the label repository.
pub type SessionId = i64;
