use unitcost_core::db::{KeyValueStore, SqliteStore, CURRENT_SCHEMA_VERSION};
use tempfile::tempdir;

#[test]
fn sqlite_store_initializes_and_keeps_values_across_opens() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("store.db");

    // First open should create schema and allow writes.
    {
        let mut store = SqliteStore::open(&db_path).expect("open store");
        let version: i32 = store
            .connection()
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .expect("schema version");
        assert_eq!(version, CURRENT_SCHEMA_VERSION);

        assert_eq!(store.get("savedProducts").expect("get"), None);
        store.set("savedProducts", "[]").expect("set");
        store.set("savedProducts", "[1]").expect("overwrite");
        store.set("other", "x").expect("set other");
    }

    // Second open should see existing schema and data.
    {
        let mut store = SqliteStore::open(&db_path).expect("re-open store");
        assert_eq!(store.get("savedProducts").expect("get").as_deref(), Some("[1]"));
        assert_eq!(store.get("other").expect("get other").as_deref(), Some("x"));

        store.remove("other").expect("remove");
        store.remove("never-there").expect("remove absent");
        assert_eq!(store.get("other").expect("get other"), None);
        assert_eq!(store.get("savedProducts").expect("get").as_deref(), Some("[1]"));
    }
}

#[test]
fn in_memory_store_has_same_schema() {
    let mut store = SqliteStore::open_in_memory().expect("open in memory");
    store.set("k", "v").expect("set");
    assert_eq!(store.get("k").expect("get").as_deref(), Some("v"));
}

#[test]
fn sqlite_store_creates_missing_parent_directories() {
    let dir = tempdir().expect("tempdir");
    let db_path = dir.path().join("nested").join("data").join("store.db");

    let mut store = SqliteStore::open(&db_path).expect("open nested store");
    store.set("savedProducts", "[]").expect("set");

    assert!(db_path.exists());
}
