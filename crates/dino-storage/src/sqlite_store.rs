use std::cell::RefCell;

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;

use dino_core::ports::{KeyValueStore, StoreError};

use crate::StorageError;
use crate::models::NewEntryRow;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS kv_entries (
  key TEXT PRIMARY KEY NOT NULL,
  value TEXT NOT NULL,
  updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Backend clave-valor sobre una tabla SQLite (`kv_entries`).
pub struct SqliteKeyValueStore {
  conn: RefCell<SqliteConnection>,
}

impl SqliteKeyValueStore {
  /// `database_url` es una ruta de fichero o `:memory:`.
  pub fn new(database_url: &str) -> Result<Self, StorageError> {
    let mut conn = SqliteConnection::establish(database_url)?;
    diesel::sql_query(CREATE_TABLE).execute(&mut conn)?;
    Ok(Self { conn: RefCell::new(conn) })
  }
}

fn query_err(e: diesel::result::Error) -> StoreError {
  StorageError::Query(e).into()
}

impl KeyValueStore for SqliteKeyValueStore {
  fn get(&self, entry_key: &str) -> Result<Option<String>, StoreError> {
    use crate::schema::kv_entries::dsl::*;

    let mut conn = self.conn.borrow_mut();
    kv_entries
      .filter(key.eq(entry_key))
      .select(value)
      .first::<String>(&mut *conn)
      .optional()
      .map_err(query_err)
  }

  fn set(&self, entry_key: &str, entry_value: &str) -> Result<(), StoreError> {
    use crate::schema::kv_entries::dsl::*;

    let mut conn = self.conn.borrow_mut();
    diesel::insert_into(kv_entries)
      .values(&NewEntryRow { key: entry_key, value: entry_value })
      .on_conflict(key)
      .do_update()
      .set((value.eq(entry_value), updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP"))))
      .execute(&mut *conn)
      .map_err(query_err)?;

    Ok(())
  }

  fn remove(&self, entry_key: &str) -> Result<(), StoreError> {
    use crate::schema::kv_entries::dsl::*;

    let mut conn = self.conn.borrow_mut();
    diesel::delete(kv_entries.filter(key.eq(entry_key))).execute(&mut *conn).map_err(query_err)?;

    Ok(())
  }
}
