// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default resolution for incomplete tracker info.
//!
//! Config-style fields are filled with precedence:
//! 1. The value already present in the record (if truthy)
//! 2. The parent audit's tracker configuration (if truthy)
//! 3. The global [`DefaultValues`]
//!
//! Title, status and due date come from the assessment itself.

use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::info::{IdValue, TrackerInfo, Truthy};
use crate::status::StatusMapping;

/// Global fallback values for tracker configuration fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultValues {
    pub component_id: IdValue,
    pub hotlist_id: IdValue,
    pub issue_type: String,
    pub issue_priority: String,
    pub issue_severity: String,
}

impl Default for DefaultValues {
    fn default() -> Self {
        DefaultValues {
            component_id: IdValue::Int(188208),
            hotlist_id: IdValue::Int(864906),
            issue_type: "PROCESS".to_string(),
            issue_priority: "P2".to_string(),
            issue_severity: "S2".to_string(),
        }
    }
}

/// Fills missing tracker info fields for an assessment.
///
/// Holds the read-only defaults and status mapping so callers can share
/// one resolver across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultResolver {
    defaults: DefaultValues,
    status_mapping: StatusMapping,
}

impl DefaultResolver {
    pub fn new(defaults: DefaultValues, status_mapping: StatusMapping) -> Self {
        DefaultResolver {
            defaults,
            status_mapping,
        }
    }

    pub fn defaults(&self) -> &DefaultValues {
        &self.defaults
    }

    pub fn status_mapping(&self) -> &StatusMapping {
        &self.status_mapping
    }

    /// Fill every falsy field of `info` in place.
    ///
    /// Truthy fields are never overwritten, so repeated calls are no-ops.
    pub fn fill_missing(&self, assessment: &Assessment, info: &mut TrackerInfo) {
        let audit_info = assessment.audit.issue_tracker.as_ref();
        let defaults = &self.defaults;

        fill_field(
            "component_id",
            &mut info.component_id,
            audit_info.and_then(|a| a.component_id.as_ref()),
            &defaults.component_id,
        );
        fill_field(
            "hotlist_id",
            &mut info.hotlist_id,
            audit_info.and_then(|a| a.hotlist_id.as_ref()),
            &defaults.hotlist_id,
        );
        fill_field(
            "issue_type",
            &mut info.issue_type,
            audit_info.and_then(|a| a.issue_type.as_ref()),
            &defaults.issue_type,
        );
        fill_field(
            "issue_priority",
            &mut info.issue_priority,
            audit_info.and_then(|a| a.issue_priority.as_ref()),
            &defaults.issue_priority,
        );
        fill_field(
            "issue_severity",
            &mut info.issue_severity,
            audit_info.and_then(|a| a.issue_severity.as_ref()),
            &defaults.issue_severity,
        );

        if !info.title.is_truthy() {
            info.title = Some(assessment.title.clone());
        }
        if !info.status.is_truthy() {
            info.status = self
                .status_mapping
                .get(assessment.status)
                .map(str::to_string);
            if info.status.is_none() {
                tracing::debug!(status = %assessment.status, "no tracker status mapped");
            }
        }
        if info.due_date.is_none() {
            info.due_date = assessment.start_date;
        }
    }

    /// Owned variant of [`DefaultResolver::fill_missing`].
    pub fn resolve_defaults(&self, assessment: &Assessment, mut info: TrackerInfo) -> TrackerInfo {
        self.fill_missing(assessment, &mut info);
        info
    }
}

/// Fill a config field from the audit value, falling back to the default.
fn fill_field<T: Truthy + Clone>(
    field: &'static str,
    slot: &mut Option<T>,
    audit_value: Option<&T>,
    default_value: &T,
) {
    if slot.is_truthy() {
        return;
    }
    match audit_value.filter(|v| v.is_truthy()) {
        Some(value) => {
            tracing::trace!(field, source = "audit", "filled tracker field");
            *slot = Some(value.clone());
        }
        None => {
            tracing::trace!(field, source = "default", "filled tracker field");
            *slot = Some(default_value.clone());
        }
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
