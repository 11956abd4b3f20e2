//! v001: labels table keyed by (session, record).

use rusqlite::Connection;

pub fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS labels (
            session_id  INTEGER NOT NULL,
            record_id   INTEGER NOT NULL,
            label       TEXT NOT NULL,
            family      TEXT,
            iteration   INTEGER NOT NULL,
            method      TEXT NOT NULL,
            annotation  INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            PRIMARY KEY (session_id, record_id)
        );
        CREATE INDEX IF NOT EXISTS idx_labels_label_family
            ON labels (session_id, label, family);
        ",
    )
}
