// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only capabilities the integration needs from persistent storage.
//!
//! Each trait carries its own error type so storage failures reach the
//! caller untranslated.

use std::collections::BTreeSet;

/// Lookup of tracker tickets already linked to tracked objects.
pub trait IssueLinks {
    type Error;

    /// Returns true if any tracked object is linked to `issue_id`.
    fn issue_exists(&self, issue_id: &str) -> Result<bool, Self::Error>;
}

/// Access-control role membership.
pub trait RoleDirectory {
    type Error;

    /// Returns the subset of `emails` whose owners hold `role_name` on any object.
    fn emails_with_role(
        &self,
        role_name: &str,
        emails: &BTreeSet<String>,
    ) -> Result<BTreeSet<String>, Self::Error>;
}

impl<T: IssueLinks + ?Sized> IssueLinks for &T {
    type Error = T::Error;

    fn issue_exists(&self, issue_id: &str) -> Result<bool, Self::Error> {
        (**self).issue_exists(issue_id)
    }
}

impl<T: RoleDirectory + ?Sized> RoleDirectory for &T {
    type Error = T::Error;

    fn emails_with_role(
        &self,
        role_name: &str,
        emails: &BTreeSet<String>,
    ) -> Result<BTreeSet<String>, Self::Error> {
        (**self).emails_with_role(role_name, emails)
    }
}
