//! # sieve-clustering
//!
//! Per-cluster statistics aggregation and representative-sample selection.
//! A [`Cluster`] accumulates member signals, resolves a consensus label at
//! finalization, and then serves annotation batches under several selection
//! strategies while honoring an exclusion set of already-shown records.

pub mod cluster;
pub mod cluster_set;

pub use cluster::ordering::{sort_rows, Direction, SortKey};
pub use cluster::{Cluster, MemberRecord, MemberRow, Partition, SelectionMode};
pub use cluster_set::ClusterSet;
