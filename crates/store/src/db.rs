// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for tracker links and access control.
//!
//! The [`Database`] struct owns the connection; record operations live in
//! [`crate::issues`] and [`crate::access`].

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;

use crate::error::{Error, Result};

/// SQL schema for the integration database.
pub const SCHEMA: &str = r#"
-- People who can receive notifications
CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    name TEXT,
    created_at TEXT NOT NULL
);

-- Named roles, scoped to an object type
CREATE TABLE IF NOT EXISTS access_control_roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    object_type TEXT NOT NULL,
    UNIQUE (name, object_type)
);

-- A role on one concrete object
CREATE TABLE IF NOT EXISTS access_control_list (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ac_role_id INTEGER NOT NULL,
    object_type TEXT NOT NULL,
    object_id INTEGER NOT NULL,
    UNIQUE (ac_role_id, object_type, object_id),
    FOREIGN KEY (ac_role_id) REFERENCES access_control_roles(id)
);

-- People assigned to an access control list entry
CREATE TABLE IF NOT EXISTS access_control_people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    person_id INTEGER NOT NULL,
    ac_list_id INTEGER NOT NULL,
    UNIQUE (person_id, ac_list_id),
    FOREIGN KEY (person_id) REFERENCES people(id),
    FOREIGN KEY (ac_list_id) REFERENCES access_control_list(id)
);

-- Tracked objects and their external tickets
CREATE TABLE IF NOT EXISTS issuetracker_issues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    object_type TEXT NOT NULL,
    object_id INTEGER NOT NULL,
    issue_id TEXT UNIQUE,          -- NULL until a ticket exists
    component_id INTEGER,
    hotlist_id INTEGER,
    enabled INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    UNIQUE (object_type, object_id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_acl_role ON access_control_list(ac_role_id);
CREATE INDEX IF NOT EXISTS idx_acp_list ON access_control_people(ac_list_id);
CREATE INDEX IF NOT EXISTS idx_roles_name ON access_control_roles(name);
"#;

/// Parse an RFC3339 timestamp from the database.
pub(crate) fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database handle.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrent readers
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        tracing::debug!(path = %path.display(), "opened tracker database");
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
