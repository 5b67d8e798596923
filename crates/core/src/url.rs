// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display URLs for external tracker tickets.

use std::fmt;

/// Template used when no bug URL template is configured.
pub const FALLBACK_URL_TEMPLATE: &str = "http://issue/%s";

/// Placeholder replaced by the ticket identifier.
pub const URL_PLACEHOLDER: &str = "%s";

/// Build the tracker URL for a ticket.
///
/// Empty templates count as unset. `%%` renders as a literal `%`. Only
/// the first placeholder is substituted and the identifier is inserted
/// as-is; other `%` sequences are copied through.
pub fn build_url(template: Option<&str>, issue_id: impl fmt::Display) -> String {
    let template = template
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_URL_TEMPLATE);

    let mut url = String::with_capacity(template.len());
    let mut substituted = false;
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        url.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("%%") {
            url.push('%');
            rest = after;
        } else if let Some(after) = tail.strip_prefix(URL_PLACEHOLDER).filter(|_| !substituted) {
            url.push_str(&issue_id.to_string());
            substituted = true;
            rest = after;
        } else {
            url.push('%');
            rest = &tail[1..];
        }
    }
    url.push_str(rest);
    url
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
