//! Cluster-wide label reads and writes against the label repository.
//!
//! Repository failures propagate unchanged.

use sieve_core::constants::UNKNOWN_LABEL;
use sieve_core::errors::SieveResult;
use sieve_core::models::{LabelAssignment, LabelFamilyCounts, RecordId, SessionId};
use sieve_core::traits::ILabelRepository;
use tracing::info;

use super::Cluster;

impl Cluster {
    /// Strip machine-assigned labels from every member. Human annotations stay.
    ///
    /// Returns the number of members whose label was removed.
    pub fn remove_cluster_label<R: ILabelRepository + ?Sized>(
        &self,
        repo: &R,
        session_id: SessionId,
    ) -> SieveResult<usize> {
        let _span = sieve_observability::propagation_span!(session_id, self.rows.len()).entered();
        let mut removed = 0;
        for row in &self.rows {
            if !repo.has_annotation(row.id, session_id)? {
                repo.remove_label(session_id, row.id)?;
                removed += 1;
            }
        }
        info!(session_id, removed, "cluster label removed");
        Ok(removed)
    }

    /// Write `label`/`family` to every member as a machine assignment.
    pub fn add_cluster_label<R: ILabelRepository + ?Sized>(
        &self,
        repo: &R,
        label: &str,
        family: Option<&str>,
        session_id: SessionId,
        iteration: u32,
        method: &str,
    ) -> SieveResult<()> {
        let _span = sieve_observability::propagation_span!(session_id, self.rows.len()).entered();
        for row in &self.rows {
            repo.add_label(
                session_id,
                &LabelAssignment {
                    record_id: row.id,
                    label: label.to_string(),
                    family: family.map(str::to_string),
                    iteration,
                    method: method.to_string(),
                    annotation: false,
                },
            )?;
        }
        info!(session_id, label, family, iteration, method, "cluster label added");
        Ok(())
    }

    /// Label and family counts over the members.
    pub fn labels_families<R: ILabelRepository + ?Sized>(
        &self,
        repo: &R,
        session_id: SessionId,
    ) -> SieveResult<LabelFamilyCounts> {
        repo.labels_families_for(session_id, &self.members())
    }

    /// Members carrying `label`/`family`. The pair `unknown`/`unknown` (or `unknown`
    /// with no family) selects the members without any label.
    pub fn label_family_ids<R: ILabelRepository + ?Sized>(
        &self,
        repo: &R,
        label: &str,
        family: Option<&str>,
        session_id: SessionId,
    ) -> SieveResult<Vec<RecordId>> {
        let members = self.members();
        if label == UNKNOWN_LABEL && family.map_or(true, |f| f == UNKNOWN_LABEL) {
            repo.unlabeled_ids(session_id, &members)
        } else {
            repo.ids_with_label_family(session_id, label, family, &members)
        }
    }
}
