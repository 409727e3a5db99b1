use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::errors::StoreError;

// Thread-local connection slot: one lazily-opened connection per thread.
thread_local! {
    static BILLING_CONN: RefCell<Option<Connection>> = const { RefCell::new(None) };
}

/// Cheaply cloneable handle to the billing store; holds only the path.
#[derive(Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provides this thread's connection to the closure, opening it on
    /// first use.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        BILLING_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                if slot.is_none() {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| StoreError::DbError(format!("Open DB failed: {e}")))?;
                    *slot = Some(conn);
                }
                let conn = slot.as_mut().expect("slot filled above");
                f(conn)
            })
            .map_err(|_| StoreError::InternalError)?
    }
}

/// Applies the SQL schema file to the store.
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), StoreError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| StoreError::DbError(format!("Failed to read schema file: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| StoreError::DbError(format!("Failed to apply schema: {e}")))
    })
}
