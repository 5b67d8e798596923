// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! itrack-core: issue tracker integration utilities
//!
//! This crate validates, normalizes and completes the issue tracker
//! settings attached to assessments, builds ticket URLs, and answers the
//! read-only questions the integration asks the store (is a ticket linked,
//! who holds a role).
//!
//! Storage is reached through the [`store`] traits; `itrack-store`
//! provides a SQLite implementation.

pub mod assessment;
pub mod defaults;
pub mod emails;
pub mod env;
pub mod error;
pub mod info;
pub mod links;
pub mod settings;
pub mod status;
pub mod store;
pub mod url;
pub mod validate;

pub use assessment::{Assessment, Audit};
pub use defaults::{DefaultResolver, DefaultValues};
pub use emails::{exclude_auditor_emails, exclude_role_emails, AUDITORS_ROLE};
pub use error::{Error, Result};
pub use info::{IdValue, TrackerInfo, Truthy};
pub use links::is_linked;
pub use settings::Settings;
pub use status::{AssessmentStatus, StatusMapping};
pub use store::{IssueLinks, RoleDirectory};
pub use url::build_url;
pub use validate::{normalize, validate};
