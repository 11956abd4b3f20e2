use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RecordId;

/// One label written to the label repository for a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAssignment {
    pub record_id: RecordId,
    pub label: String,
    pub family: Option<String>,
    /// Annotation iteration in which the label was produced.
    pub iteration: u32,
    /// Name of the method that produced the label.
    pub method: String,
    /// `true` for a human annotation, `false` for a machine assignment.
    pub annotation: bool,
}

/// `label -> family -> number of records`.
pub type LabelFamilyCounts = BTreeMap<String, BTreeMap<String, usize>>;
