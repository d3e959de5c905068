use rusqlite::Connection;
use tempfile::tempdir;
use unitcost_core::db::{DbError, SqliteStore, WorkspaceLayout};

#[test]
fn sqlite_store_open_errors_on_unsupported_schema_version() {
    // Arrange: temp layout + DB with an unsupported user_version.
    let tmp = tempdir().expect("temp dir");
    let layout = WorkspaceLayout::new(tmp.path());
    std::fs::create_dir_all(&layout.meta_dir).expect("create .unitcost dir");

    {
        let conn = Connection::open(&layout.store_path).expect("open raw sqlite db");
        conn.pragma_update(None, "user_version", 99_i32).expect("set user_version pragma");
    }

    match SqliteStore::open(&layout.store_path) {
        Err(DbError::UnsupportedSchemaVersion { found, min_supported, max_supported }) => {
            assert_eq!(found, 99, "unexpected found schema version");
            assert_eq!(min_supported, 0, "unexpected min_supported schema version");
            assert_eq!(max_supported, 1, "unexpected max_supported schema version");
        }
        Err(err) => {
            panic!("expected UnsupportedSchemaVersion error, got different DbError: {err}");
        }
        Ok(_) => {
            panic!("expected UnsupportedSchemaVersion error, got Ok(_)");
        }
    }
}
