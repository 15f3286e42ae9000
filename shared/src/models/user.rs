//! Session actor model
//!
//! The console operates on behalf of a single current user. Role is a
//! tagged variant so the admin bypass is a property of the type, not a
//! string comparison scattered at call sites.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of granted permission names
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn insert(&mut self, permission: impl Into<String>) {
        self.0.insert(permission.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// User role
///
/// Admin short-circuits every permission query by construction; the other
/// variants carry their explicit grants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager {
        #[serde(default)]
        permissions: PermissionSet,
    },
    Employee {
        #[serde(default)]
        permissions: PermissionSet,
    },
}

impl Role {
    /// Whether this role satisfies a permission check
    pub fn allows(&self, permission: &str) -> bool {
        match self {
            Role::Admin => true,
            Role::Manager { permissions } | Role::Employee { permissions } => {
                permissions.contains(permission)
            }
        }
    }
}

/// Current-session actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub role: Role,
}
