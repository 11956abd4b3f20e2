//! Label writes.

use rusqlite::{params, Connection};

use sieve_core::errors::SieveResult;
use sieve_core::models::{LabelAssignment, RecordId, SessionId};

use crate::to_storage_err;

/// Insert or replace a label. An existing human annotation is only replaced by
/// another annotation.
pub fn upsert_label(
    conn: &Connection,
    session_id: SessionId,
    assignment: &LabelAssignment,
) -> SieveResult<bool> {
    let changed = conn
        .execute(
            "INSERT INTO labels
                (session_id, record_id, label, family, iteration, method, annotation, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT (session_id, record_id) DO UPDATE SET
                label = excluded.label,
                family = excluded.family,
                iteration = excluded.iteration,
                method = excluded.method,
                annotation = excluded.annotation,
                created_at = excluded.created_at
             WHERE labels.annotation = 0 OR excluded.annotation = 1",
            params![
                session_id,
                assignment.record_id,
                assignment.label,
                assignment.family,
                assignment.iteration,
                assignment.method,
                assignment.annotation,
                chrono::Utc::now().to_rfc3339(),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if changed == 0 {
        tracing::debug!(
            session_id,
            record_id = assignment.record_id,
            "machine label skipped, record is annotated"
        );
    }
    Ok(changed > 0)
}

pub fn delete_label(conn: &Connection, session_id: SessionId, record_id: RecordId) -> SieveResult<()> {
    conn.execute(
        "DELETE FROM labels WHERE session_id = ?1 AND record_id = ?2",
        params![session_id, record_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
