//! LabelStore: owns the SQLite connection and implements ILabelRepository.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use sieve_core::config::StorageConfig;
use sieve_core::errors::SieveResult;
use sieve_core::models::{LabelAssignment, LabelFamilyCounts, RecordId, SessionId};
use sieve_core::traits::ILabelRepository;

use crate::queries::{label_ops, label_query};
use crate::{migrations, pragmas, to_storage_err};

/// SQLite-backed label repository. One connection, serialized behind a mutex.
pub struct LabelStore {
    conn: Mutex<Connection>,
}

impl LabelStore {
    /// Open (creating if needed) a store backed by a file on disk.
    pub fn open(path: &Path) -> SieveResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> SieveResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    pub fn open_from_config(config: &StorageConfig) -> SieveResult<Self> {
        Self::open(Path::new(&config.db_path))
    }

    fn initialize(conn: Connection) -> SieveResult<Self> {
        let version = migrations::run_migrations(&conn)?;
        tracing::debug!(schema_version = version, "label store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> SieveResult<T>
    where
        F: FnOnce(&Connection) -> SieveResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&conn)
    }

    /// The label a record carries in the session, if any.
    pub fn get_label(
        &self,
        session_id: SessionId,
        record_id: RecordId,
    ) -> SieveResult<Option<LabelAssignment>> {
        self.with_conn(|conn| label_query::get_label(conn, session_id, record_id))
    }

    pub fn count_labels(&self, session_id: SessionId) -> SieveResult<usize> {
        self.with_conn(|conn| label_query::count_labels(conn, session_id))
    }

    pub fn schema_version(&self) -> SieveResult<u32> {
        self.with_conn(migrations::current_version)
    }

    pub fn is_wal(&self) -> SieveResult<bool> {
        self.with_conn(pragmas::verify_wal_mode)
    }
}

impl ILabelRepository for LabelStore {
    fn has_annotation(&self, record_id: RecordId, session_id: SessionId) -> SieveResult<bool> {
        self.with_conn(|conn| label_query::has_annotation(conn, session_id, record_id))
    }

    fn remove_label(&self, session_id: SessionId, record_id: RecordId) -> SieveResult<()> {
        self.with_conn(|conn| label_ops::delete_label(conn, session_id, record_id))
    }

    fn add_label(&self, session_id: SessionId, assignment: &LabelAssignment) -> SieveResult<()> {
        self.with_conn(|conn| label_ops::upsert_label(conn, session_id, assignment).map(|_| ()))
    }

    fn labels_families_for(
        &self,
        session_id: SessionId,
        record_ids: &[RecordId],
    ) -> SieveResult<LabelFamilyCounts> {
        self.with_conn(|conn| label_query::labels_families(conn, session_id, record_ids))
    }

    fn unlabeled_ids(
        &self,
        session_id: SessionId,
        record_ids: &[RecordId],
    ) -> SieveResult<Vec<RecordId>> {
        self.with_conn(|conn| label_query::unlabeled_ids(conn, session_id, record_ids))
    }

    fn ids_with_label_family(
        &self,
        session_id: SessionId,
        label: &str,
        family: Option<&str>,
        record_ids: &[RecordId],
    ) -> SieveResult<Vec<RecordId>> {
        self.with_conn(|conn| {
            label_query::ids_with_label_family(conn, session_id, label, family, record_ids)
        })
    }
}
