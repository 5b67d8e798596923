// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    unset = { None, "http://issue/12345" },
    empty = { Some(""), "http://issue/12345" },
    configured = { Some("https://t.example/%s"), "https://t.example/12345" },
    query = { Some("https://b.example/issues?id=%s&view=full"), "https://b.example/issues?id=12345&view=full" },
)]
fn build_url_for_numeric_id(template: Option<&str>, expected: &str) {
    assert_eq!(build_url(template, 12345), expected);
}

#[parameterized(
    escape_after_placeholder = { "http://x/%s?q=100%%", "http://x/1?q=100%" },
    escape_before_placeholder = { "http://x/100%%/%s", "http://x/100%/1" },
    escaped_placeholder = { "http://x/%%s/%s", "http://x/%s/1" },
    lone_percent = { "http://x/%d/%s%", "http://x/%d/1%" },
    escape_without_placeholder = { "http://x/50%%", "http://x/50%" },
)]
fn build_url_percent_escapes(template: &str, expected: &str) {
    assert_eq!(build_url(Some(template), 1), expected);
}

#[test]
fn build_url_inserts_identifier_verbatim() {
    assert_eq!(build_url(None, "b/99 x"), "http://issue/b/99 x");
}

#[test]
fn build_url_replaces_first_placeholder_only() {
    assert_eq!(build_url(Some("https://x/%s/%s"), 1), "https://x/1/%s");
}

#[test]
fn build_url_without_placeholder_returns_template() {
    assert_eq!(build_url(Some("https://x/static"), 1), "https://x/static");
}
