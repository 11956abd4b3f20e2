use crate::errors::SieveResult;
use crate::models::{LabelAssignment, LabelFamilyCounts, RecordId, SessionId};

/// Persistent store of per-record labels and families, scoped by labeling session.
///
/// Shared between clusters; implementations synchronize internally.
pub trait ILabelRepository: Send + Sync {
    /// Whether the record carries a human annotation in the session.
    fn has_annotation(&self, record_id: RecordId, session_id: SessionId) -> SieveResult<bool>;

    /// Delete whatever label the record carries in the session.
    fn remove_label(&self, session_id: SessionId, record_id: RecordId) -> SieveResult<()>;

    /// Write a label. A machine assignment never replaces a human annotation.
    fn add_label(&self, session_id: SessionId, assignment: &LabelAssignment) -> SieveResult<()>;

    /// Count labels and families over `record_ids`.
    fn labels_families_for(
        &self,
        session_id: SessionId,
        record_ids: &[RecordId],
    ) -> SieveResult<LabelFamilyCounts>;

    /// Subset of `record_ids` without any label, in input order.
    fn unlabeled_ids(
        &self,
        session_id: SessionId,
        record_ids: &[RecordId],
    ) -> SieveResult<Vec<RecordId>>;

    /// Subset of `record_ids` labeled `label` (and `family`, when given), in input order.
    fn ids_with_label_family(
        &self,
        session_id: SessionId,
        label: &str,
        family: Option<&str>,
        record_ids: &[RecordId],
    ) -> SieveResult<Vec<RecordId>>;
}
