// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation and coercion of tracker identifier fields.
//!
//! The external tracker only accepts integer component and hotlist IDs.
//! [`validate`] checks a record, [`normalize`] also rewrites the accepted
//! values as integers. Both go through [`coerce_id`] so they always agree.

use crate::error::{Error, Result};
use crate::info::{IdValue, TrackerInfo, Truthy};

/// Identifier fields that must hold integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdField {
    Component,
    Hotlist,
}

impl IdField {
    /// Field name as it appears in tracker payloads.
    pub fn name(&self) -> &'static str {
        match self {
            IdField::Component => "component_id",
            IdField::Hotlist => "hotlist_id",
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            IdField::Component => "Component ID",
            IdField::Hotlist => "Hotlist ID",
        }
    }
}

/// Coerce one identifier value.
///
/// Returns `Ok(None)` for absent or falsy values, which are never errors.
pub fn coerce_id(value: Option<&IdValue>, field: IdField) -> Result<Option<i64>> {
    let Some(value) = value.filter(|v| v.is_truthy()) else {
        return Ok(None);
    };
    match value.as_int() {
        Some(n) => Ok(Some(n)),
        None => {
            tracing::debug!(field = field.name(), %value, "rejected non-numeric tracker id");
            Err(Error::Validation(format!(
                "{} must be a number.",
                field.label()
            )))
        }
    }
}

/// Validate that component ID and hotlist ID are integers.
///
/// Component ID is checked first; only the first failure is reported.
pub fn validate(info: &TrackerInfo) -> Result<()> {
    coerce_id(info.component_id.as_ref(), IdField::Component)?;
    coerce_id(info.hotlist_id.as_ref(), IdField::Hotlist)?;
    Ok(())
}

/// Validate component ID and hotlist ID and store them as integers.
///
/// Falsy values are kept as they were.
pub fn normalize(mut info: TrackerInfo) -> Result<TrackerInfo> {
    if let Some(n) = coerce_id(info.component_id.as_ref(), IdField::Component)? {
        info.component_id = Some(IdValue::Int(n));
    }
    if let Some(n) = coerce_id(info.hotlist_id.as_ref(), IdField::Hotlist)? {
        info.hotlist_id = Some(IdValue::Int(n));
    }
    Ok(info)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
