// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker link records.

use itrack_core::store::IssueLinks;
use rusqlite::{params, OptionalExtension};

use crate::db::{parse_timestamp, Database};
use crate::error::{Error, Result};
use crate::models::IssueTrackerIssue;

/// Map a row to an IssueTrackerIssue.
///
/// Expected columns: id, object_type, object_id, issue_id, component_id,
/// hotlist_id, enabled, created_at
fn row_to_issue(row: &rusqlite::Row) -> rusqlite::Result<IssueTrackerIssue> {
    let created_at_str: String = row.get(7)?;
    Ok(IssueTrackerIssue {
        id: row.get(0)?,
        object_type: row.get(1)?,
        object_id: row.get(2)?,
        issue_id: row.get(3)?,
        component_id: row.get(4)?,
        hotlist_id: row.get(5)?,
        enabled: row.get(6)?,
        created_at: parse_timestamp(&created_at_str, "created_at")?,
    })
}

impl Database {
    /// Store a tracker link record.
    ///
    /// Returns the database-assigned ID. Fails if the object or the ticket
    /// is already linked.
    pub fn add_issue_link(&self, issue: &IssueTrackerIssue) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO issuetracker_issues
                 (object_type, object_id, issue_id, component_id, hotlist_id, enabled, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                issue.object_type,
                issue.object_id,
                issue.issue_id,
                issue.component_id,
                issue.hotlist_id,
                issue.enabled,
                issue.created_at.to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get the link record for a tracked object, if any.
    pub fn get_issue_link(&self, object_type: &str, object_id: i64) -> Result<Option<IssueTrackerIssue>> {
        let issue = self
            .conn
            .query_row(
                "SELECT id, object_type, object_id, issue_id, component_id, hotlist_id, enabled, created_at
                 FROM issuetracker_issues
                 WHERE object_type = ?1 AND object_id = ?2",
                params![object_type, object_id],
                row_to_issue,
            )
            .optional()?;
        Ok(issue)
    }

    /// Remove the link record for a tracked object.
    pub fn remove_issue_link(&self, object_type: &str, object_id: i64) -> Result<()> {
        self.conn.execute(
            "DELETE FROM issuetracker_issues WHERE object_type = ?1 AND object_id = ?2",
            params![object_type, object_id],
        )?;
        Ok(())
    }
}

impl IssueLinks for Database {
    type Error = Error;

    fn issue_exists(&self, issue_id: &str) -> Result<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM issuetracker_issues WHERE issue_id = ?1)",
            [issue_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
