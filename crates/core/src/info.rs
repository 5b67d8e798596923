// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker info records attached to assessments and audits.
//!
//! Identifier fields arrive loosely typed (JSON payloads, TOML settings),
//! so they are carried as [`IdValue`] until validation coerces them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Values that can be empty-ish in the way tracker payloads treat them.
///
/// A field holding a falsy value counts as missing for both validation
/// and default resolution.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// A loosely-typed identifier value (`component_id`, `hotlist_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Anything else a payload may carry (lists, objects).
    Other(serde_json::Value),
}

impl IdValue {
    /// Coerce to an integer.
    ///
    /// Text must be a base-10 integer, optionally signed and surrounded by
    /// whitespace; single underscores may separate digit groups (`1_000`).
    /// Finite floats truncate toward zero. Lists and objects never coerce.
    /// Values outside the `i64` range fail.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            IdValue::Bool(b) => Some(i64::from(*b)),
            IdValue::Int(n) => Some(*n),
            IdValue::Float(f) => float_to_int(*f),
            IdValue::Text(s) => text_to_int(s),
            IdValue::Other(_) => None,
        }
    }
}

fn text_to_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    let grouped_ok = !digits.starts_with('_') && !digits.ends_with('_') && !digits.contains("__");
    if !grouped_ok {
        return None;
    }
    s.replace('_', "").parse().ok()
}

fn float_to_int(f: f64) -> Option<i64> {
    let truncated = f.trunc();
    // i64::MAX is not representable as f64; the bound is its rounded-up value.
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

impl Truthy for IdValue {
    fn is_truthy(&self) -> bool {
        match self {
            IdValue::Bool(b) => *b,
            IdValue::Int(n) => *n != 0,
            IdValue::Float(f) => *f != 0.0,
            IdValue::Text(s) => !s.is_empty(),
            IdValue::Other(v) => json_truthy(v),
        }
    }
}

fn json_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdValue::Bool(b) => write!(f, "{b}"),
            IdValue::Int(n) => write!(f, "{n}"),
            IdValue::Float(x) => write!(f, "{x}"),
            IdValue::Text(s) => write!(f, "{s}"),
            IdValue::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for IdValue {
    fn from(n: i64) -> Self {
        IdValue::Int(n)
    }
}

impl From<i32> for IdValue {
    fn from(n: i32) -> Self {
        IdValue::Int(i64::from(n))
    }
}

impl From<&str> for IdValue {
    fn from(s: &str) -> Self {
        IdValue::Text(s.to_string())
    }
}

impl From<String> for IdValue {
    fn from(s: String) -> Self {
        IdValue::Text(s)
    }
}

/// Issue tracker settings for a single tracked object.
///
/// Every field is optional: callers hand in partial records and the
/// normalizer and default resolver complete them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerInfo {
    /// Component in the external tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<IdValue>,
    /// Hotlist (grouping) in the external tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotlist_id: Option<IdValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Status string in the external tracker's vocabulary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl TrackerInfo {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the component ID (builder pattern).
    pub fn with_component_id(mut self, value: impl Into<IdValue>) -> Self {
        self.component_id = Some(value.into());
        self
    }

    /// Sets the hotlist ID (builder pattern).
    pub fn with_hotlist_id(mut self, value: impl Into<IdValue>) -> Self {
        self.hotlist_id = Some(value.into());
        self
    }

    /// Sets the issue type (builder pattern).
    pub fn with_issue_type(mut self, value: impl Into<String>) -> Self {
        self.issue_type = Some(value.into());
        self
    }

    /// Sets the issue priority (builder pattern).
    pub fn with_issue_priority(mut self, value: impl Into<String>) -> Self {
        self.issue_priority = Some(value.into());
        self
    }

    /// Sets the issue severity (builder pattern).
    pub fn with_issue_severity(mut self, value: impl Into<String>) -> Self {
        self.issue_severity = Some(value.into());
        self
    }

    /// Sets the title (builder pattern).
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Sets the external status (builder pattern).
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    /// Sets the due date (builder pattern).
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
