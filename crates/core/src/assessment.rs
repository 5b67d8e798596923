// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assessments and the audits that own them.
//!
//! Only the fields the tracker integration reads are modeled here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::info::TrackerInfo;
use crate::status::AssessmentStatus;

/// An audit: the parent of a set of assessments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    pub title: String,
    /// Audit-level tracker configuration, used as a fallback for its
    /// assessments. Never modified by the integration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_tracker: Option<TrackerInfo>,
}

impl Audit {
    /// Creates an audit without tracker configuration.
    pub fn new(title: impl Into<String>) -> Self {
        Audit {
            title: title.into(),
            issue_tracker: None,
        }
    }

    /// Sets the audit-level tracker configuration (builder pattern).
    pub fn with_issue_tracker(mut self, info: TrackerInfo) -> Self {
        self.issue_tracker = Some(info);
        self
    }
}

/// An assessment tracked in the external issue tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub title: String,
    pub status: AssessmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub audit: Audit,
}

impl Assessment {
    /// Creates a not-yet-started assessment under the given audit.
    pub fn new(title: impl Into<String>, audit: Audit) -> Self {
        Assessment {
            title: title.into(),
            status: AssessmentStatus::NotStarted,
            start_date: None,
            audit,
        }
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: AssessmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the start date (builder pattern).
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }
}

#[cfg(test)]
#[path = "assessment_tests.rs"]
mod tests;
