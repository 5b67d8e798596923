// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket link lookup.

use std::fmt;

use crate::store::IssueLinks;

/// Checks whether a tracker ticket is already linked to a tracked object.
///
/// The answer is a point-in-time read: checking and then linking is not
/// atomic, uniqueness must be enforced by the store.
pub fn is_linked<S>(store: &S, ticket_id: impl fmt::Display) -> Result<bool, S::Error>
where
    S: IssueLinks + ?Sized,
{
    let ticket_id = ticket_id.to_string();
    let linked = store.issue_exists(&ticket_id)?;
    tracing::debug!(ticket_id = %ticket_id, linked, "checked tracker link");
    Ok(linked)
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
