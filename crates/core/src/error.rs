// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for itrack-core operations.

use thiserror::Error;

/// All possible errors that can occur in itrack-core operations.
///
/// Store failures are not represented here: they surface through the
/// store's own error type, see [`crate::store`].
#[derive(Debug, Error)]
pub enum Error {
    /// Tracker info was rejected; the message names the offending field.
    #[error("{0}")]
    Validation(String),

    #[error("invalid assessment status: '{0}'\n  hint: valid statuses are: Not Started, In Progress, In Review, Verified, Completed, Rework Needed, Deprecated")]
    InvalidStatus(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors raised by tracker info validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// A specialized Result type for itrack-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
