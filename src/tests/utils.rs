use crate::db::connection::{init_db, Database};
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns a fresh on-disk test database using the production schema.
pub fn make_db(label: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "utilicost_{label}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos()
    ));

    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize test DB");
    db
}
