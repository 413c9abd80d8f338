use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS expense_cats (
    name TEXT NOT NULL UNIQUE,
    budget TEXT NOT NULL DEFAULT '0'
);
CREATE TABLE IF NOT EXISTS expenses (
    category TEXT NOT NULL,
    name TEXT NOT NULL UNIQUE,
    amount TEXT NOT NULL,
    date_added TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS income_cats (
    name TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS income (
    category TEXT NOT NULL,
    name TEXT NOT NULL UNIQUE,
    amount TEXT NOT NULL,
    date_added TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS goals (
    name TEXT NOT NULL UNIQUE,
    kind TEXT NOT NULL CHECK (kind IN ('saving', 'income')),
    target TEXT NOT NULL,
    progress TEXT NOT NULL
);
";

pub fn establish_connection(db_path: &Path) -> Result<Connection> {
    if let Some(dir) = db_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let conn = Connection::open(db_path)?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

#[cfg(test)]
pub fn establish_test_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_establish_connection_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("tracker.db");

        let conn = establish_connection(&db_path).unwrap();
        assert!(db_path.exists());

        // Schema must be in place.
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM goals", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_establish_connection_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("tracker.db");

        establish_connection(&db_path).unwrap();
        let conn = establish_connection(&db_path).unwrap();

        conn.execute(
            "INSERT INTO expense_cats (name, budget) VALUES ('food', '0')",
            [],
        )
        .unwrap();
    }
}
