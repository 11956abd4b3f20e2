//! Conversion to and from the transport shape.
//!
//! Only members, distances, and the label travel; every other signal is dropped.

use std::collections::HashSet;

use sieve_core::errors::{SieveError, SieveResult};
use sieve_core::models::{ClusterTransport, RecordId};

use super::{Cluster, MemberRecord};

impl Cluster {
    /// Members and their distances, minus `exclude`, plus the label.
    pub fn to_transport(&self, exclude: &HashSet<RecordId>) -> ClusterTransport {
        let (members, distances): (Vec<RecordId>, Vec<f64>) = self
            .rows
            .iter()
            .filter(|r| !exclude.contains(&r.id))
            .map(|r| (r.id, r.distance))
            .unzip();
        ClusterTransport {
            members,
            distances,
            label: self.label.clone(),
        }
    }

    /// Rebuild a display cluster from its transport shape.
    ///
    /// Member order is kept as given. A labeled transport yields a finalized cluster;
    /// an unlabeled one can still be finalized by the caller.
    pub fn from_transport(transport: ClusterTransport) -> SieveResult<Self> {
        let ClusterTransport {
            members,
            distances,
            label,
        } = transport;
        if members.len() != distances.len() {
            return Err(SieveError::precondition(format!(
                "transport has {} members but {} distances",
                members.len(),
                distances.len()
            )));
        }

        let mut cluster = Cluster::new();
        for (id, distance) in members.into_iter().zip(distances) {
            cluster.add(MemberRecord::new(id, distance))?;
        }
        cluster.finalized = label.is_some();
        cluster.label = label;
        Ok(cluster)
    }

    pub fn to_json(&self, exclude: &HashSet<RecordId>) -> SieveResult<String> {
        Ok(serde_json::to_string(&self.to_transport(exclude))?)
    }

    pub fn from_json(json: &str) -> SieveResult<Self> {
        Self::from_transport(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalized_with_family() -> Cluster {
        let mut cluster = Cluster::new();
        cluster
            .add(
                MemberRecord::new(5, 0.7)
                    .with_confidence(vec![0.2, 0.8])
                    .with_family(Some("malware"), "trojan"),
            )
            .unwrap();
        cluster
            .add(MemberRecord::new(6, 0.2).with_confidence(vec![0.4, 0.6]))
            .unwrap();
        cluster.finalize(0).unwrap();
        cluster
    }

    #[test]
    fn transport_keeps_pairs_and_drops_excluded() {
        let cluster = finalized_with_family();
        let exclude: HashSet<RecordId> = [6].into_iter().collect();
        let t = cluster.to_transport(&exclude);
        assert_eq!(t.members, vec![5]);
        assert_eq!(t.distances, vec![0.7]);
        assert_eq!(t.label.unwrap().to_string(), "malware__trojan");
    }

    #[test]
    fn roundtrip_is_lossy_only_in_statistics() {
        let cluster = finalized_with_family();
        let back = Cluster::from_transport(cluster.to_transport(&HashSet::new())).unwrap();
        assert_eq!(back.members(), cluster.members());
        assert_eq!(back.distances(), cluster.distances());
        assert_eq!(back.label(), cluster.label());
        assert!(back.is_finalized());
        assert!(back.probabilities().is_empty());
        assert!(back.entropy().is_empty());
        assert!(back.family_tally().is_empty());
    }

    #[test]
    fn json_uses_plain_label_string() {
        let cluster = finalized_with_family();
        let json = cluster.to_json(&HashSet::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["label"], "malware__trojan");
        assert_eq!(value["members"], serde_json::json!([6, 5]));

        let back = Cluster::from_json(&json).unwrap();
        assert_eq!(back.members(), vec![6, 5]);
    }

    #[test]
    fn rejects_misaligned_transport() {
        let t = ClusterTransport {
            members: vec![1, 2],
            distances: vec![0.1],
            label: None,
        };
        assert!(matches!(
            Cluster::from_transport(t),
            Err(SieveError::PreconditionViolation { .. })
        ));
        assert!(matches!(
            Cluster::from_json("{\"members\": ["),
            Err(SieveError::SerializationError(_))
        ));
    }

    #[test]
    fn unlabeled_transport_can_be_finalized() {
        let t = ClusterTransport {
            members: vec![2, 1],
            distances: vec![0.4, 0.3],
            label: None,
        };
        let mut cluster = Cluster::from_transport(t).unwrap();
        assert!(!cluster.is_finalized());
        assert_eq!(cluster.finalize(9).unwrap(), 10);
        assert_eq!(cluster.members(), vec![1, 2]);
    }
}
