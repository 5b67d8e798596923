// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted records.

use chrono::{DateTime, Utc};

/// Link between a tracked object and a ticket in the external tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueTrackerIssue {
    /// Database-assigned identifier.
    pub id: i64,
    /// Kind of tracked object (e.g., "Assessment").
    pub object_type: String,
    pub object_id: i64,
    /// External ticket identifier; None until a ticket is created.
    pub issue_id: Option<String>,
    pub component_id: Option<i64>,
    pub hotlist_id: Option<i64>,
    /// Whether synchronization with the tracker is enabled.
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl IssueTrackerIssue {
    /// Creates a disabled, unlinked record with the current timestamp.
    pub fn new(object_type: impl Into<String>, object_id: i64) -> Self {
        IssueTrackerIssue {
            id: 0, // Will be set by database
            object_type: object_type.into(),
            object_id,
            issue_id: None,
            component_id: None,
            hotlist_id: None,
            enabled: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the external ticket ID (builder pattern).
    pub fn with_issue_id(mut self, issue_id: impl Into<String>) -> Self {
        self.issue_id = Some(issue_id.into());
        self
    }

    /// Sets the component and hotlist IDs (builder pattern).
    pub fn with_ids(mut self, component_id: Option<i64>, hotlist_id: Option<i64>) -> Self {
        self.component_id = component_id;
        self.hotlist_id = hotlist_id;
        self
    }

    /// Enables synchronization (builder pattern).
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }
}
