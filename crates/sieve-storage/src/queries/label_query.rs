//! Label reads. Subset queries preserve the order of the ids passed in.

use rusqlite::{params, Connection, OptionalExtension};

use sieve_core::constants::UNKNOWN_LABEL;
use sieve_core::errors::SieveResult;
use sieve_core::models::{LabelAssignment, LabelFamilyCounts, RecordId, SessionId};

use crate::to_storage_err;

pub fn get_label(
    conn: &Connection,
    session_id: SessionId,
    record_id: RecordId,
) -> SieveResult<Option<LabelAssignment>> {
    conn.prepare_cached(
        "SELECT label, family, iteration, method, annotation
         FROM labels WHERE session_id = ?1 AND record_id = ?2",
    )
    .and_then(|mut stmt| {
        stmt.query_row(params![session_id, record_id], |row| {
            Ok(LabelAssignment {
                record_id,
                label: row.get(0)?,
                family: row.get(1)?,
                iteration: row.get(2)?,
                method: row.get(3)?,
                annotation: row.get(4)?,
            })
        })
        .optional()
    })
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn has_annotation(conn: &Connection, session_id: SessionId, record_id: RecordId) -> SieveResult<bool> {
    Ok(get_label(conn, session_id, record_id)?.is_some_and(|a| a.annotation))
}

/// `label -> family -> count` over `record_ids`. A missing family counts as `unknown`.
pub fn labels_families(
    conn: &Connection,
    session_id: SessionId,
    record_ids: &[RecordId],
) -> SieveResult<LabelFamilyCounts> {
    let mut counts = LabelFamilyCounts::new();
    for &record_id in record_ids {
        if let Some(assignment) = get_label(conn, session_id, record_id)? {
            let family = assignment
                .family
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            *counts
                .entry(assignment.label)
                .or_default()
                .entry(family)
                .or_default() += 1;
        }
    }
    Ok(counts)
}

pub fn unlabeled_ids(
    conn: &Connection,
    session_id: SessionId,
    record_ids: &[RecordId],
) -> SieveResult<Vec<RecordId>> {
    let mut ids = Vec::new();
    for &record_id in record_ids {
        if get_label(conn, session_id, record_id)?.is_none() {
            ids.push(record_id);
        }
    }
    Ok(ids)
}

pub fn ids_with_label_family(
    conn: &Connection,
    session_id: SessionId,
    label: &str,
    family: Option<&str>,
    record_ids: &[RecordId],
) -> SieveResult<Vec<RecordId>> {
    let mut ids = Vec::new();
    for &record_id in record_ids {
        let matches = get_label(conn, session_id, record_id)?.is_some_and(|a| {
            a.label == label && family.map_or(true, |f| a.family.as_deref() == Some(f))
        });
        if matches {
            ids.push(record_id);
        }
    }
    Ok(ids)
}

pub fn count_labels(conn: &Connection, session_id: SessionId) -> SieveResult<usize> {
    conn.query_row(
        "SELECT COUNT(*) FROM labels WHERE session_id = ?1",
        params![session_id],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n as usize)
    .map_err(|e| to_storage_err(e.to_string()))
}
