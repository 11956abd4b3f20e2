//! Finalization: consensus label resolution and canonical member ordering.

use std::collections::HashMap;

use sieve_core::errors::{SieveError, SieveResult};
use sieve_core::models::{ClusterLabel, FamilyKey, RecordId};
use tracing::debug;

use super::ordering::{sort_rows, Direction, SortKey};
use super::Cluster;

impl Cluster {
    /// Resolve the label and fix the canonical member order.
    ///
    /// `unknown_counter` numbers clusters without family information across a run;
    /// the returned value must be passed to the next cluster's finalization.
    pub fn finalize(&mut self, unknown_counter: u64) -> SieveResult<u64> {
        let _span = sieve_observability::finalize_span!(self.rows.len(), unknown_counter).entered();
        let next = self.resolve_label(unknown_counter)?;
        self.establish_canonical_order()?;
        Ok(next)
    }

    /// Pick the family with the strictly greatest count; the first one seen wins ties.
    pub(crate) fn resolve_label(&mut self, unknown_counter: u64) -> SieveResult<u64> {
        if self.label.is_some() || self.finalized {
            return Err(SieveError::precondition("cluster is already finalized"));
        }

        let mut best: Option<(&FamilyKey, usize)> = None;
        for (key, count) in &self.family_tally {
            if best.map_or(true, |(_, max)| *count > max) {
                best = Some((key, *count));
            }
        }

        let (label, next) = match best {
            Some((key, _)) => (ClusterLabel::Family(key.clone()), unknown_counter),
            None => (ClusterLabel::Unknown(unknown_counter), unknown_counter + 1),
        };
        debug!(label = %label, cluster_size = self.rows.len(), "cluster label resolved");
        self.label = Some(label);
        Ok(next)
    }

    /// Order members by ascending probability when every member has one, else by
    /// ascending distance.
    pub(crate) fn establish_canonical_order(&mut self) -> SieveResult<()> {
        if self.label.is_none() {
            return Err(SieveError::precondition(
                "label must be resolved before ordering members",
            ));
        }
        if self.finalized {
            return Err(SieveError::precondition("cluster is already finalized"));
        }

        if self.has_probabilities() {
            sort_rows(&mut self.rows, SortKey::Probability, Direction::Ascending)?;
            // Entropy is replaced by the sorted probabilities rather than carried
            // with its own values. Kept as-is pending product review.
            for row in &mut self.rows {
                row.entropy = row.probability;
            }
        } else {
            sort_rows(&mut self.rows, SortKey::Distance, Direction::Ascending)?;
        }
        self.finalized = true;
        Ok(())
    }

    /// Attach density-model likelihoods, aligned with the canonical member order.
    /// Allowed once, after finalization.
    pub fn set_likelihood(&mut self, likelihood: Vec<f64>) -> SieveResult<()> {
        if !self.finalized {
            return Err(SieveError::precondition(
                "likelihood must be set after finalization",
            ));
        }
        if self.likelihood_set {
            return Err(SieveError::precondition("likelihood is already set"));
        }
        if likelihood.len() != self.rows.len() {
            return Err(SieveError::precondition(format!(
                "likelihood has {} values for {} members",
                likelihood.len(),
                self.rows.len()
            )));
        }
        for (row, value) in self.rows.iter_mut().zip(likelihood) {
            row.likelihood = Some(value);
        }
        self.likelihood_set = true;
        Ok(())
    }

    /// Likelihood of each requested member, in the requested order.
    pub fn likelihood_of(&self, ids: &[RecordId]) -> SieveResult<Vec<f64>> {
        if !self.likelihood_set {
            return Err(SieveError::precondition("likelihood is not populated"));
        }
        let by_id: HashMap<RecordId, Option<f64>> =
            self.rows.iter().map(|r| (r.id, r.likelihood)).collect();
        ids.iter()
            .map(|id| {
                by_id.get(id).copied().flatten().ok_or_else(|| {
                    SieveError::precondition(format!("record {id} is not a member of the cluster"))
                })
            })
            .collect()
    }
}
