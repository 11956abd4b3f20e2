//! Disjoint representative / anomalous / random split for display.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use sieve_core::config::SelectionConfig;
use sieve_core::errors::SieveResult;
use sieve_core::models::RecordId;

use super::{Cluster, SelectionMode};

/// Three pairwise-disjoint member sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub representative: Vec<RecordId>,
    pub anomalous: Vec<RecordId>,
    pub random: Vec<RecordId>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.representative.len() + self.anomalous.len() + self.random.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.representative
            .iter()
            .chain(&self.anomalous)
            .chain(&self.random)
            .copied()
    }
}

impl Cluster {
    /// Split `total_count` between representative (floor half) and anomalous members,
    /// plus up to `total_count` random members when `include_random` is set.
    pub fn partition(
        &self,
        total_count: usize,
        include_random: bool,
        exclude: &HashSet<RecordId>,
    ) -> SieveResult<Partition> {
        self.partition_with_rng(total_count, include_random, exclude, &mut rand::thread_rng())
    }

    /// [`Cluster::partition`] sized by the selection config.
    pub fn partition_with_config(
        &self,
        config: &SelectionConfig,
        exclude: &HashSet<RecordId>,
    ) -> SieveResult<Partition> {
        self.partition(config.visualization_count, config.include_random, exclude)
    }

    /// [`Cluster::partition`] drawing the random set from `rng`.
    pub fn partition_with_rng<R: Rng + ?Sized>(
        &self,
        total_count: usize,
        include_random: bool,
        exclude: &HashSet<RecordId>,
        rng: &mut R,
    ) -> SieveResult<Partition> {
        let half = total_count / 2;
        let remainder = total_count - half;

        // Each set excludes everything chosen before it.
        let mut seen = exclude.clone();
        let representative = self.select_with_rng(SelectionMode::Center, half, &seen, rng)?;
        seen.extend(representative.iter().copied());

        let anomalous = self.select_with_rng(SelectionMode::Anomalous, remainder, &seen, rng)?;
        seen.extend(anomalous.iter().copied());

        let random = if include_random {
            self.select_with_rng(SelectionMode::Random, total_count, &seen, rng)?
        } else {
            Vec::new()
        };

        Ok(Partition {
            representative,
            anomalous,
            random,
        })
    }
}
