// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashSet;

struct FakeLinks {
    linked: HashSet<String>,
}

impl IssueLinks for FakeLinks {
    type Error = String;

    fn issue_exists(&self, issue_id: &str) -> Result<bool, String> {
        Ok(self.linked.contains(issue_id))
    }
}

struct FailingLinks;

impl IssueLinks for FailingLinks {
    type Error = String;

    fn issue_exists(&self, _issue_id: &str) -> Result<bool, String> {
        Err("connection lost".to_string())
    }
}

fn fake(ids: &[&str]) -> FakeLinks {
    FakeLinks {
        linked: ids.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn linked_ticket_is_found() {
    let store = fake(&["12345"]);
    assert!(is_linked(&store, "12345").unwrap());
}

#[test]
fn numeric_ticket_id_is_formatted() {
    let store = fake(&["12345"]);
    assert!(is_linked(&store, 12345).unwrap());
}

#[test]
fn unused_ticket_is_not_linked() {
    let store = fake(&["12345"]);
    assert!(!is_linked(&store, "54321").unwrap());
}

#[test]
fn store_errors_propagate_unchanged() {
    let err = is_linked(&FailingLinks, "1").unwrap_err();
    assert_eq!(err, "connection lost");
}

#[test]
fn works_through_trait_objects() {
    let store = fake(&["7"]);
    let dyn_store: &dyn IssueLinks<Error = String> = &store;
    assert!(is_linked(dyn_store, 7).unwrap());
}
