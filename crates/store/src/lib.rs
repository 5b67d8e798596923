// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! itrack-store: SQLite storage for the issue tracker integration
//!
//! Implements the read-only [`itrack_core::store`] capabilities over a
//! SQLite database holding tracker links and access-control assignments.
//! Write operations exist to seed that data; the integration itself only
//! reads.

pub mod access;
pub mod db;
pub mod error;
pub mod issues;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use models::IssueTrackerIssue;
