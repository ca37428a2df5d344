use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey, MigrationSet, Runner},
    store::{Store, StoreError},
};
use dentbase_schema::{collection::Collection, field::Field};
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("dentbase_core_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn create_regions(app: &mut dyn App) -> Result<(), MigrationError> {
    let mut collection = Collection::base("regions");
    collection.fields.add(Field::text("label").required());
    app.save(collection)?;

    Ok(())
}

fn region_set() -> MigrationSet {
    MigrationSet::new(vec![Migration {
        key: MigrationKey::new(1),
        name: "regions",
        up: create_regions,
        down: migrate::noop,
    }])
    .expect("single key")
}

#[test]
fn reopened_store_remembers_collections_and_ledger() {
    let dir = temp_dir("reopen");

    {
        let mut store = Store::open(&dir).expect("open fresh store");
        Runner::new()
            .apply(&mut store, &region_set())
            .expect("apply");
    }

    let mut store = Store::open(&dir).expect("reopen store");
    assert!(store.is_applied(MigrationKey::new(1)));
    let regions = store
        .find_collection_by_name_or_id("regions")
        .expect("regions survives reopen");
    assert!(regions.fields.get("label").is_some());

    // the ledger, not collection presence, is what makes this a no-op
    let outcome = Runner::new()
        .apply(&mut store, &region_set())
        .expect("re-apply");
    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn bootstrap_users_survives_reopen_with_a_stable_id() {
    let dir = temp_dir("bootstrap_stable");

    let first_id = Store::open(&dir)
        .expect("open fresh store")
        .find_collection_by_name_or_id("users")
        .expect("users bootstrapped")
        .id;

    let second_id = Store::open(&dir)
        .expect("reopen store")
        .find_collection_by_name_or_id("users")
        .expect("users reloaded")
        .id;

    assert_eq!(first_id, second_id, "reopen must load, not re-bootstrap");
}

#[test]
fn unreadable_snapshot_is_an_error_not_a_reset() {
    let dir = temp_dir("corrupt");
    std::fs::write(dir.join("schema.json"), b"{ not json").expect("write corrupt snapshot");

    let err = Store::open(&dir).expect_err("corrupt snapshot must fail");
    assert!(matches!(err, StoreError::Snapshot { .. }), "got: {err}");
}
