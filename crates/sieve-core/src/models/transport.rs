use serde::{Deserialize, Serialize};

use super::{ClusterLabel, RecordId};

/// Wire shape of a cluster: members paired index-for-index with their
/// distances to the centroid, plus the resolved label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterTransport {
    pub members: Vec<RecordId>,
    pub distances: Vec<f64>,
    pub label: Option<ClusterLabel>,
}
