// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration settings.
//!
//! Settings are read from a TOML file and include:
//! - `issue_tracker_bug_url_tmpl`: URL template for ticket links (`%s` is the ticket ID)
//! - `[defaults]`: global fallbacks for tracker config fields
//! - `[status_mapping]`: assessment status to tracker status table
//!
//! Every key is optional. The `ISSUE_TRACKER_BUG_URL_TMPL` environment
//! variable overrides the file's template when applied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::defaults::{DefaultResolver, DefaultValues};
use crate::env;
use crate::error::{Error, Result};
use crate::status::StatusMapping;
use crate::url::build_url;

/// Issue tracker integration settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Template for ticket URLs; unset or empty uses the built-in fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_tracker_bug_url_tmpl: Option<String>,
    #[serde(default)]
    pub defaults: DefaultValues,
    /// Replaces the built-in mapping entirely when present.
    #[serde(default)]
    pub status_mapping: StatusMapping,
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading tracker settings");
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read settings: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse settings: {}", e)))
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_url_template(env::issue_tracker_bug_url_tmpl())
    }

    /// Replaces the URL template when `template` is set.
    pub fn with_url_template(mut self, template: Option<String>) -> Self {
        if let Some(template) = template {
            self.issue_tracker_bug_url_tmpl = Some(template);
        }
        self
    }

    /// Saves settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize settings: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Renders the display URL for a ticket with the configured template.
    pub fn issue_url(&self, issue_id: impl fmt::Display) -> String {
        build_url(self.issue_tracker_bug_url_tmpl.as_deref(), issue_id)
    }

    /// Builds a default resolver from the configured tables.
    pub fn resolver(&self) -> DefaultResolver {
        DefaultResolver::new(self.defaults.clone(), self.status_mapping.clone())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
