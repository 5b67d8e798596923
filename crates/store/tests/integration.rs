// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end checks of the integration utilities over the SQLite store.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use itrack_core::{
    exclude_auditor_emails, exclude_role_emails, is_linked, normalize, validate, Assessment,
    AssessmentStatus, Audit, IdValue, Settings, TrackerInfo,
};
use itrack_store::{Database, IssueTrackerIssue};
use std::collections::BTreeSet;
use tempfile::TempDir;

fn emails(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Make `email` an auditor of one audit, reusing the person, role and ACL rows.
fn seed_auditor(db: &Database, email: &str, audit_id: i64) {
    let person_id = match db.find_person(email).unwrap() {
        Some(id) => id,
        None => db.add_person(email, None).unwrap(),
    };
    let role_id = match db.find_role("Auditors", "Audit").unwrap() {
        Some(id) => id,
        None => db.add_role("Auditors", "Audit").unwrap(),
    };
    let acl_id = match db.find_acl(role_id, "Audit", audit_id).unwrap() {
        Some(id) => id,
        None => db.add_acl(role_id, "Audit", audit_id).unwrap(),
    };
    db.assign_person(acl_id, person_id).unwrap();
}

#[test]
fn auditors_are_excluded_from_recipients() {
    let db = Database::open_in_memory().unwrap();
    seed_auditor(&db, "a@x.com", 1);
    db.add_person("b@x.com", None).unwrap();

    let kept = exclude_auditor_emails(&db, ["a@x.com", "b@x.com"]).unwrap();

    assert_eq!(kept, emails(&["b@x.com"]));
}

#[test]
fn several_auditors_are_excluded_from_recipients() {
    let db = Database::open_in_memory().unwrap();
    seed_auditor(&db, "a@x.com", 1);
    seed_auditor(&db, "c@x.com", 1);
    seed_auditor(&db, "d@x.com", 2);
    db.add_person("b@x.com", None).unwrap();

    let kept = exclude_auditor_emails(&db, ["a@x.com", "b@x.com", "c@x.com", "d@x.com"]).unwrap();

    assert_eq!(kept, emails(&["b@x.com"]));
}

#[test]
fn recipients_unchanged_without_auditors() {
    let db = Database::open_in_memory().unwrap();
    db.add_person("a@x.com", None).unwrap();

    let input = emails(&["a@x.com", "b@x.com", "unknown@x.com"]);
    let kept = exclude_role_emails(&db, input.clone(), "Auditors").unwrap();

    assert_eq!(kept, input);
}

#[test]
fn linked_ticket_lookup() {
    let db = Database::open_in_memory().unwrap();
    db.add_issue_link(&IssueTrackerIssue::new("Assessment", 1).with_issue_id("12345"))
        .unwrap();

    assert!(is_linked(&db, 12345).unwrap());
    assert!(!is_linked(&db, "99999").unwrap());
}

#[test]
fn on_disk_database_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tracker.db");
    {
        let db = Database::open(&path).unwrap();
        db.add_issue_link(&IssueTrackerIssue::new("Assessment", 3).with_issue_id("42"))
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert!(is_linked(&db, "42").unwrap());
}

#[test]
fn new_assessment_ticket_flow() {
    let settings = Settings::from_toml_str(
        r#"
issue_tracker_bug_url_tmpl = "https://t.example/%s"

[defaults]
component_id = "000"
hotlist_id = 5

[status_mapping]
"In Review" = "ASSIGNED"
"#,
    )
    .unwrap();
    let db = Database::open_in_memory().unwrap();

    let audit = Audit::new("Audit 2024").with_issue_tracker(TrackerInfo::new().with_component_id(99));
    let assessment = Assessment::new("Review Q1", audit)
        .with_status(AssessmentStatus::InReview)
        .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

    let requested: TrackerInfo = serde_json::from_str(r#"{"hotlist_id": "77"}"#).unwrap();
    validate(&requested).unwrap();
    let info = normalize(requested).unwrap();
    let info = settings.resolver().resolve_defaults(&assessment, info);

    assert_eq!(info.component_id, Some(IdValue::Int(99)));
    assert_eq!(info.hotlist_id, Some(IdValue::Int(77)));
    assert_eq!(info.issue_type.as_deref(), Some("PROCESS"));
    assert_eq!(info.title.as_deref(), Some("Review Q1"));
    assert_eq!(info.status.as_deref(), Some("ASSIGNED"));

    let ticket_id = "12345";
    assert!(!is_linked(&db, ticket_id).unwrap());
    let link = IssueTrackerIssue::new("Assessment", 1)
        .with_issue_id(ticket_id)
        .with_ids(
            info.component_id.as_ref().and_then(IdValue::as_int),
            info.hotlist_id.as_ref().and_then(IdValue::as_int),
        )
        .enabled();
    db.add_issue_link(&link).unwrap();

    assert!(is_linked(&db, ticket_id).unwrap());
    assert_eq!(settings.issue_url(ticket_id), "https://t.example/12345");
}
