// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::info::IdValue;
use serde_json::json;

#[test]
fn assessment_builder_defaults() {
    let assessment = Assessment::new("Review Q1", Audit::new("Audit 2024"));
    assert_eq!(assessment.status, AssessmentStatus::NotStarted);
    assert!(assessment.start_date.is_none());
    assert!(assessment.audit.issue_tracker.is_none());
}

#[test]
fn assessment_deserializes_from_payload() {
    let assessment: Assessment = serde_json::from_value(json!({
        "title": "Review Q1",
        "status": "In Review",
        "start_date": "2024-01-15",
        "audit": {
            "title": "Audit 2024",
            "issue_tracker": {"component_id": 99}
        }
    }))
    .unwrap();

    assert_eq!(assessment.status, AssessmentStatus::InReview);
    assert_eq!(
        assessment.start_date,
        Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    );
    let audit_info = assessment.audit.issue_tracker.unwrap();
    assert_eq!(audit_info.component_id, Some(IdValue::Int(99)));
}

#[test]
fn audit_without_tracker_omits_field() {
    let value = serde_json::to_value(Audit::new("Audit")).unwrap();
    assert_eq!(value, json!({"title": "Audit"}));
}
