// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Role-based filtering of notification recipients.

use std::collections::BTreeSet;

use crate::store::RoleDirectory;

/// Name of the access-control role held by audit auditors.
pub const AUDITORS_ROLE: &str = "Auditors";

/// Returns `emails` without the addresses of people holding `role_name`.
///
/// Duplicates collapse into a set. Addresses with no matching person are
/// kept. An empty input returns immediately without querying the store.
pub fn exclude_role_emails<S, I, E>(
    store: &S,
    emails: I,
    role_name: &str,
) -> Result<BTreeSet<String>, S::Error>
where
    S: RoleDirectory + ?Sized,
    I: IntoIterator<Item = E>,
    E: Into<String>,
{
    let mut emails: BTreeSet<String> = emails.into_iter().map(Into::into).collect();
    if emails.is_empty() {
        return Ok(emails);
    }

    let holders = store.emails_with_role(role_name, &emails)?;
    let before = emails.len();
    emails.retain(|email| !holders.contains(email));
    tracing::debug!(
        role = role_name,
        excluded = before - emails.len(),
        kept = emails.len(),
        "filtered recipient emails"
    );
    Ok(emails)
}

/// Returns `emails` without the addresses of auditors.
pub fn exclude_auditor_emails<S, I, E>(store: &S, emails: I) -> Result<BTreeSet<String>, S::Error>
where
    S: RoleDirectory + ?Sized,
    I: IntoIterator<Item = E>,
    E: Into<String>,
{
    exclude_role_emails(store, emails, AUDITORS_ROLE)
}

#[cfg(test)]
#[path = "emails_tests.rs"]
mod tests;
