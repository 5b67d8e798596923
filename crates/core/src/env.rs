// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

/// Environment variable names read by this crate.
pub mod vars {
    pub const ISSUE_TRACKER_BUG_URL_TMPL: &str = "ISSUE_TRACKER_BUG_URL_TMPL";
}

/// Returns the value of `ISSUE_TRACKER_BUG_URL_TMPL` if set and non-empty.
pub fn issue_tracker_bug_url_tmpl() -> Option<String> {
    std::env::var(vars::ISSUE_TRACKER_BUG_URL_TMPL)
        .ok()
        .filter(|v| !v.is_empty())
}
