use duetrack_core::{Attachment, InMemoryProcessStore, Process, ProcessStore, UpsertOutcome};

#[test]
fn upsert_appends_new_names_in_order() {
    let mut store = InMemoryProcessStore::new();

    assert_eq!(
        store.upsert(Process::new("B", "2024-03-05")),
        UpsertOutcome::Inserted
    );
    assert_eq!(
        store.upsert(Process::new("A", "2024-03-06")),
        UpsertOutcome::Inserted
    );

    let names: Vec<&str> = store.all().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn upsert_same_name_keeps_one_record_with_latest_due_date() {
    let mut store = InMemoryProcessStore::new();
    store.upsert(Process::new("License", "2024-01-01"));
    let outcome = store.upsert(Process::new("License", "2025-06-30"));

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].due_date, "2025-06-30");
}

#[test]
fn upsert_update_keeps_stored_send_date_and_replaces_attachment() {
    let mut store = InMemoryProcessStore::new();
    store.upsert(
        Process::new("Permit", "2024-01-01")
            .with_send_date("2023-12-01")
            .with_attachment(Attachment::new("v1.pdf", b"%PDF-1".to_vec())),
    );
    store.upsert(Process::new("Permit", "2024-02-01").with_send_date("2024-01-15"));

    let stored = store.get("Permit").expect("permit should exist");
    assert_eq!(stored.send_date, "2023-12-01");
    assert_eq!(stored.due_date, "2024-02-01");
    assert_eq!(stored.attachment, None);
}

#[test]
fn upsert_key_is_case_sensitive() {
    let mut store = InMemoryProcessStore::new();
    store.upsert(Process::new("permit", "2024-01-01"));
    store.upsert(Process::new("Permit", "2024-02-01"));

    assert_eq!(store.len(), 2);
}

#[test]
fn empty_name_is_a_regular_key() {
    let mut store = InMemoryProcessStore::new();
    assert_eq!(store.upsert(Process::new("", "2024-01-01")), UpsertOutcome::Inserted);
    assert_eq!(store.upsert(Process::new("", "2024-05-01")), UpsertOutcome::Updated);

    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].due_date, "2024-05-01");
}

#[test]
fn collecting_into_store_applies_upsert_semantics() {
    let store: InMemoryProcessStore = vec![
        Process::new("A", "2024-01-01"),
        Process::new("B", "2024-01-02"),
        Process::new("A", "2024-01-03"),
    ]
    .into_iter()
    .collect();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("A").map(|p| p.due_date.as_str()), Some("2024-01-03"));
    assert!(!store.is_empty());
}
