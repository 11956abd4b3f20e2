//! All clusters of one clustering pass.
//!
//! Label resolution runs sequentially in cluster index order so the unknown-cluster
//! counter numbers placeholders deterministically; canonical ordering is independent
//! per cluster and runs in parallel.

use std::collections::HashSet;

use rayon::prelude::*;
use sieve_core::errors::{SieveError, SieveResult};
use sieve_core::models::{ClusterTransport, RecordId};
use tracing::info;

use crate::cluster::{Cluster, MemberRecord};

#[derive(Debug, Clone, Default)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
}

impl ClusterSet {
    /// `num_clusters` empty clusters.
    pub fn with_clusters(num_clusters: usize) -> Self {
        Self {
            clusters: vec![Cluster::new(); num_clusters],
        }
    }

    /// Group records by their assigned cluster index.
    pub fn from_assignments(
        num_clusters: usize,
        assignments: impl IntoIterator<Item = (usize, MemberRecord)>,
    ) -> SieveResult<Self> {
        let mut set = Self::with_clusters(num_clusters);
        for (index, record) in assignments {
            set.add(index, record)?;
        }
        Ok(set)
    }

    pub fn add(&mut self, cluster_index: usize, record: MemberRecord) -> SieveResult<()> {
        let num_clusters = self.clusters.len();
        self.clusters
            .get_mut(cluster_index)
            .ok_or_else(|| {
                SieveError::invalid_argument(format!(
                    "cluster index {cluster_index} out of range for {num_clusters} clusters"
                ))
            })?
            .add(record)
    }

    /// Finalize every cluster, threading `unknown_counter` through them in order.
    ///
    /// Fails without touching any cluster if one of them is already labeled.
    pub fn finalize_all(&mut self, unknown_counter: u64) -> SieveResult<u64> {
        if let Some(index) = self
            .clusters
            .iter()
            .position(|c| c.label().is_some() || c.is_finalized())
        {
            return Err(SieveError::precondition(format!(
                "cluster {index} is already finalized"
            )));
        }

        let mut counter = unknown_counter;
        for cluster in &mut self.clusters {
            counter = cluster.resolve_label(counter)?;
        }
        self.clusters
            .par_iter_mut()
            .try_for_each(Cluster::establish_canonical_order)?;
        info!(
            clusters = self.clusters.len(),
            unknown = counter - unknown_counter,
            "clusters finalized"
        );
        Ok(counter)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cluster> {
        self.clusters.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cluster> {
        self.clusters.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    /// Index of the cluster holding `record_id`.
    pub fn cluster_of(&self, record_id: RecordId) -> Option<usize> {
        self.clusters.iter().position(|c| c.contains(record_id))
    }

    pub fn to_transport(&self, exclude: &HashSet<RecordId>) -> Vec<ClusterTransport> {
        self.clusters.iter().map(|c| c.to_transport(exclude)).collect()
    }

    pub fn from_transport(transports: Vec<ClusterTransport>) -> SieveResult<Self> {
        let clusters = transports
            .into_iter()
            .map(Cluster::from_transport)
            .collect::<SieveResult<Vec<_>>>()?;
        Ok(Self { clusters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments() -> Vec<(usize, MemberRecord)> {
        vec![
            (0, MemberRecord::new(1, 0.4)),
            (1, MemberRecord::new(2, 0.3).with_family(Some("malware"), "worm")),
            (0, MemberRecord::new(3, 0.1)),
            (2, MemberRecord::new(4, 0.2)),
            (1, MemberRecord::new(5, 0.9)),
        ]
    }

    #[test]
    fn groups_and_finalizes_with_sequential_counter() {
        let mut set = ClusterSet::from_assignments(3, assignments()).unwrap();
        let next = set.finalize_all(5).unwrap();
        assert_eq!(next, 7);

        let labels: Vec<String> = set.iter().map(|c| c.label().unwrap().to_string()).collect();
        assert_eq!(labels, vec!["unknown_5", "malware__worm", "unknown_6"]);
        assert_eq!(set.get(0).unwrap().members(), vec![3, 1]);
        assert_eq!(set.cluster_of(5), Some(1));
        assert_eq!(set.cluster_of(42), None);
    }

    #[test]
    fn finalize_all_leaves_set_untouched_when_a_cluster_is_labeled() {
        let unlabeled = ClusterTransport {
            members: vec![2, 1],
            distances: vec![0.4, 0.3],
            label: None,
        };
        let labeled = ClusterTransport {
            members: vec![3],
            distances: vec![0.1],
            label: Some("malware__worm".to_string().into()),
        };
        let mut set = ClusterSet::from_transport(vec![unlabeled, labeled]).unwrap();

        let err = set.finalize_all(0).unwrap_err();
        assert!(matches!(err, SieveError::PreconditionViolation { .. }));

        let first = set.get_mut(0).unwrap();
        assert!(first.label().is_none());
        assert!(!first.is_finalized());
        assert_eq!(first.finalize(0).unwrap(), 1);
        assert_eq!(first.members(), vec![1, 2]);
    }

    #[test]
    fn rejects_out_of_range_cluster() {
        let err = ClusterSet::from_assignments(1, vec![(3, MemberRecord::new(1, 0.0))]).unwrap_err();
        assert!(matches!(err, SieveError::InvalidArgument { .. }));
    }

    #[test]
    fn transport_roundtrip_keeps_every_cluster() {
        let mut set = ClusterSet::from_assignments(3, assignments()).unwrap();
        set.finalize_all(0).unwrap();
        let exclude: HashSet<RecordId> = [3].into_iter().collect();
        let transports = set.to_transport(&exclude);
        assert_eq!(transports[0].members, vec![1]);

        let back = ClusterSet::from_transport(transports).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back.get(1).unwrap().label(), set.get(1).unwrap().label());
    }
}
