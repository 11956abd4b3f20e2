//! File-backed store: WAL mode, reopen persistence, config-driven open.

use sieve_core::config::StorageConfig;
use sieve_core::models::LabelAssignment;
use sieve_core::traits::ILabelRepository;
use sieve_storage::LabelStore;

fn annotation(record_id: i64) -> LabelAssignment {
    LabelAssignment {
        record_id,
        label: "malware".to_string(),
        family: Some("ransomware".to_string()),
        iteration: 2,
        method: "annotation".to_string(),
        annotation: true,
    }
}

#[test]
fn labels_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.db");

    {
        let store = LabelStore::open(&path).unwrap();
        assert!(store.is_wal().unwrap());
        store.add_label(7, &annotation(42)).unwrap();
    }

    let store = LabelStore::open(&path).unwrap();
    assert_eq!(store.schema_version().unwrap(), 1);
    assert!(store.has_annotation(42, 7).unwrap());
    let label = store.get_label(7, 42).unwrap().unwrap();
    assert_eq!(label.family.as_deref(), Some("ransomware"));
    assert_eq!(label.iteration, 2);
}

#[test]
fn opens_from_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("cfg.db").to_string_lossy().into_owned(),
    };
    let store = LabelStore::open_from_config(&config).unwrap();
    store.add_label(1, &annotation(1)).unwrap();
    assert_eq!(store.count_labels(1).unwrap(), 1);
}
