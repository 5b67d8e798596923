// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! People and access-control role assignments.
//!
//! A person holds a role on an object when an `access_control_people` row
//! ties them to an `access_control_list` entry for that role.

use chrono::Utc;
use itrack_core::store::RoleDirectory;
use rusqlite::{params, params_from_iter, OptionalExtension};
use std::collections::BTreeSet;

use crate::db::Database;
use crate::error::{Error, Result};

impl Database {
    /// Add a person. Returns the database-assigned ID.
    pub fn add_person(&self, email: &str, name: Option<&str>) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO people (email, name, created_at) VALUES (?1, ?2, ?3)",
            params![email, name, Utc::now().to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Find a person's ID by email.
    pub fn find_person(&self, email: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row("SELECT id FROM people WHERE email = ?1", [email], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(id)
    }

    /// Add a role for an object type. Returns the database-assigned ID.
    pub fn add_role(&self, name: &str, object_type: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO access_control_roles (name, object_type) VALUES (?1, ?2)",
            params![name, object_type],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Find a role's ID by name and object type.
    pub fn find_role(&self, name: &str, object_type: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM access_control_roles WHERE name = ?1 AND object_type = ?2",
                params![name, object_type],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    /// Find the access control list entry for `role_id` on one object.
    pub fn find_acl(&self, role_id: i64, object_type: &str, object_id: i64) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM access_control_list
                 WHERE ac_role_id = ?1 AND object_type = ?2 AND object_id = ?3",
                params![role_id, object_type, object_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    /// Add an access control list entry: `role_id` on one object.
    pub fn add_acl(&self, role_id: i64, object_type: &str, object_id: i64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO access_control_list (ac_role_id, object_type, object_id)
             VALUES (?1, ?2, ?3)",
            params![role_id, object_type, object_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Assign a person to an access control list entry.
    pub fn assign_person(&self, acl_id: i64, person_id: i64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO access_control_people (person_id, ac_list_id) VALUES (?1, ?2)",
            params![person_id, acl_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }
}

impl RoleDirectory for Database {
    type Error = Error;

    fn emails_with_role(&self, role_name: &str, emails: &BTreeSet<String>) -> Result<BTreeSet<String>> {
        if emails.is_empty() {
            return Ok(BTreeSet::new());
        }

        let placeholders = (0..emails.len())
            .map(|i| format!("?{}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT DISTINCT p.email
             FROM people p
             JOIN access_control_people acp ON acp.person_id = p.id
             JOIN access_control_list acl ON acl.id = acp.ac_list_id
             JOIN access_control_roles acr ON acr.id = acl.ac_role_id
             WHERE acr.name = ?1 AND p.email IN ({placeholders})"
        );

        let args = std::iter::once(role_name).chain(emails.iter().map(String::as_str));
        let mut stmt = self.conn.prepare(&sql)?;
        let holders = stmt
            .query_map(params_from_iter(args), |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;

        Ok(holders)
    }
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
