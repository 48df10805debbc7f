//! Membership roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncoreError;

/// Coarse permission class assigned to an authenticated member of an org.
///
/// Assigned by the membership system and fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Teacher,
    Finance,
    Parent,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 5;

    /// Every role, in declaration order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Owner,
        Role::Admin,
        Role::Teacher,
        Role::Finance,
        Role::Parent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Finance => "finance",
            Role::Parent => "parent",
        }
    }

    /// Staff roles work inside the school app; parents only see the portal.
    pub fn is_staff(self) -> bool {
        !matches!(self, Role::Parent)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = EncoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| EncoreError::UnknownRole(s.to_string()))
    }
}
