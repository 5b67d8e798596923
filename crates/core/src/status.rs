// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assessment workflow statuses and their external tracker counterparts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentStatus {
    NotStarted,
    InProgress,
    InReview,
    Verified,
    Completed,
    ReworkNeeded,
    Deprecated,
}

impl AssessmentStatus {
    /// All statuses in workflow order.
    pub const ALL: [AssessmentStatus; 7] = [
        AssessmentStatus::NotStarted,
        AssessmentStatus::InProgress,
        AssessmentStatus::InReview,
        AssessmentStatus::Verified,
        AssessmentStatus::Completed,
        AssessmentStatus::ReworkNeeded,
        AssessmentStatus::Deprecated,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::NotStarted => "Not Started",
            AssessmentStatus::InProgress => "In Progress",
            AssessmentStatus::InReview => "In Review",
            AssessmentStatus::Verified => "Verified",
            AssessmentStatus::Completed => "Completed",
            AssessmentStatus::ReworkNeeded => "Rework Needed",
            AssessmentStatus::Deprecated => "Deprecated",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        AssessmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

impl Serialize for AssessmentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssessmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Lookup table from assessment status to external tracker status.
///
/// Statuses without an entry have no tracker counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMapping(HashMap<AssessmentStatus, String>);

impl StatusMapping {
    /// Creates a mapping with no entries.
    pub fn empty() -> Self {
        StatusMapping(HashMap::new())
    }

    /// Returns the tracker status for an assessment status, if mapped.
    pub fn get(&self, status: AssessmentStatus) -> Option<&str> {
        self.0.get(&status).map(String::as_str)
    }

    /// Adds or replaces an entry (builder pattern).
    pub fn with(mut self, status: AssessmentStatus, tracker_status: impl Into<String>) -> Self {
        self.0.insert(status, tracker_status.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StatusMapping {
    fn default() -> Self {
        StatusMapping::empty()
            .with(AssessmentStatus::NotStarted, "ASSIGNED")
            .with(AssessmentStatus::InProgress, "ASSIGNED")
            .with(AssessmentStatus::InReview, "FIXED")
            .with(AssessmentStatus::ReworkNeeded, "ASSIGNED")
            .with(AssessmentStatus::Verified, "VERIFIED")
            .with(AssessmentStatus::Completed, "VERIFIED")
            .with(AssessmentStatus::Deprecated, "OBSOLETE")
    }
}

impl FromIterator<(AssessmentStatus, String)> for StatusMapping {
    fn from_iter<I: IntoIterator<Item = (AssessmentStatus, String)>>(iter: I) -> Self {
        StatusMapping(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
