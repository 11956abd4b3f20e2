//! The cluster aggregate: accumulation → label resolution → canonical ordering →
//! selection, partitioning, transport, and label propagation.

mod accumulator;
pub mod ordering;
mod partition;
mod propagation;
mod resolver;
mod selection;
mod transport;

use std::collections::HashSet;

use sieve_core::models::{ClusterLabel, FamilyKey, RecordId};

pub use accumulator::{shannon_entropy, MemberRecord};
pub use ordering::MemberRow;
pub use partition::Partition;
pub use selection::SelectionMode;

/// One cluster produced by an external clustering pass.
///
/// Lifecycle: created empty, fed with [`Cluster::add`], finalized exactly once,
/// then read-only apart from a single [`Cluster::set_likelihood`].
#[derive(Debug, Clone, Default)]
pub struct Cluster {
    /// Member signals, one row per record. Canonical order after finalization.
    rows: Vec<MemberRow>,
    ids: HashSet<RecordId>,
    /// Family occurrences in first-seen order.
    family_tally: Vec<(FamilyKey, usize)>,
    annotated_count: usize,
    label: Option<ClusterLabel>,
    finalized: bool,
    likelihood_set: bool,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_instances(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Resolved label; `None` before finalization.
    pub fn label(&self) -> Option<&ClusterLabel> {
        self.label.as_ref()
    }

    /// Number of members that already carried a human annotation when added.
    pub fn annotated_count(&self) -> usize {
        self.annotated_count
    }

    /// Family occurrences in the order the families were first seen.
    pub fn family_tally(&self) -> &[(FamilyKey, usize)] {
        &self.family_tally
    }

    pub fn rows(&self) -> &[MemberRow] {
        &self.rows
    }

    pub fn members(&self) -> Vec<RecordId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn distances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.distance).collect()
    }

    /// Maximum confidence per member, or empty unless every member has one.
    pub fn probabilities(&self) -> Vec<f64> {
        collect_complete(&self.rows, |r| r.probability)
    }

    /// Confidence entropy per member, or empty unless every member has one.
    pub fn entropy(&self) -> Vec<f64> {
        collect_complete(&self.rows, |r| r.entropy)
    }

    /// Likelihood per member, or empty until [`Cluster::set_likelihood`] is called.
    pub fn likelihood(&self) -> Vec<f64> {
        collect_complete(&self.rows, |r| r.likelihood)
    }

    pub fn has_probabilities(&self) -> bool {
        is_complete(&self.rows, |r| r.probability)
    }

    pub fn has_entropy(&self) -> bool {
        is_complete(&self.rows, |r| r.entropy)
    }

    pub fn has_likelihood(&self) -> bool {
        self.likelihood_set
    }
}

fn is_complete(rows: &[MemberRow], field: impl Fn(&MemberRow) -> Option<f64>) -> bool {
    !rows.is_empty() && rows.iter().all(|r| field(r).is_some())
}

fn collect_complete(rows: &[MemberRow], field: impl Fn(&MemberRow) -> Option<f64>) -> Vec<f64> {
    rows.iter()
        .map(&field)
        .collect::<Option<Vec<f64>>>()
        .unwrap_or_default()
}
