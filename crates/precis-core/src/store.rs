//! SQLite-backed store for summary records.
//!
//! One table, no transactions, no update operation. Records are created on
//! successful upload+summarize, listed in bulk, and deleted individually or
//! wholesale. Writes go through a single connection behind a [`Mutex`];
//! every operation is a single short statement.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags, params};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// A persisted name/summary pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRecord {
    pub id: i64,
    pub pdf_name: String,
    pub summary: String,
}

/// Store of summary records, one row per summarized upload.
pub struct SummaryStore {
    conn: Mutex<Connection>,
}

impl SummaryStore {
    /// Open (creating if needed) the store at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;
             CREATE TABLE IF NOT EXISTS summaries (
                 id       INTEGER PRIMARY KEY AUTOINCREMENT,
                 pdf_name TEXT NOT NULL,
                 summary  TEXT NOT NULL
             );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert a new record, returning the id assigned by the store.
    pub fn insert(&self, pdf_name: &str, summary: &str) -> Result<i64, StoreError> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        conn.execute(
            "INSERT INTO summaries (pdf_name, summary) VALUES (?1, ?2)",
            params![pdf_name, summary],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All records, oldest first.
    pub fn list_all(&self) -> Result<Vec<SummaryRecord>, StoreError> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        let mut stmt =
            conn.prepare_cached("SELECT id, pdf_name, summary FROM summaries ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(SummaryRecord {
                id: row.get(0)?,
                pdf_name: row.get(1)?,
                summary: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Delete the record with the given id. Succeeds whether or not the id
    /// exists.
    pub fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        conn.execute("DELETE FROM summaries WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Delete every record.
    pub fn delete_all(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("store mutex poisoned");
        conn.execute("DELETE FROM summaries", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (SummaryStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SummaryStore::open(&dir.path().join("summaries.db")).unwrap();
        (store, dir)
    }

    #[test]
    fn list_empty_store() {
        let (store, _dir) = temp_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn insert_assigns_unique_increasing_ids() {
        let (store, _dir) = temp_store();
        let a = store.insert("a.pdf", "summary a").unwrap();
        let b = store.insert("b.pdf", "summary b").unwrap();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn insert_then_list_round_trips() {
        let (store, _dir) = temp_store();
        let id = store.insert("paper.pdf", "a concise synopsis").unwrap();
        let records = store.list_all().unwrap();
        assert_eq!(
            records,
            vec![SummaryRecord {
                id,
                pdf_name: "paper.pdf".into(),
                summary: "a concise synopsis".into(),
            }]
        );
    }

    #[test]
    fn delete_by_id_removes_exactly_that_record() {
        let (store, _dir) = temp_store();
        let a = store.insert("a.pdf", "sa").unwrap();
        let b = store.insert("b.pdf", "sb").unwrap();

        store.delete_by_id(a).unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, b);
    }

    #[test]
    fn delete_missing_id_is_a_noop_success() {
        let (store, _dir) = temp_store();
        let id = store.insert("a.pdf", "sa").unwrap();

        store.delete_by_id(id + 999).unwrap();

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn delete_all_empties_store() {
        let (store, _dir) = temp_store();
        for i in 0..5 {
            store.insert(&format!("{i}.pdf"), "s").unwrap();
        }
        store.delete_all().unwrap();
        assert!(store.list_all().unwrap().is_empty());

        // Deleting an already-empty store also succeeds.
        store.delete_all().unwrap();
    }

    #[test]
    fn records_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summaries.db");

        let id = {
            let store = SummaryStore::open(&path).unwrap();
            store.insert("kept.pdf", "survives restart").unwrap()
        };

        let store = SummaryStore::open(&path).unwrap();
        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].pdf_name, "kept.pdf");
    }

    #[test]
    fn ids_not_reused_after_delete() {
        let (store, _dir) = temp_store();
        let a = store.insert("a.pdf", "sa").unwrap();
        store.delete_by_id(a).unwrap();
        let b = store.insert("b.pdf", "sb").unwrap();
        assert!(b > a);
    }
}
