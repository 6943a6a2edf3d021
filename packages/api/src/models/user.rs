//! User records for the two application areas.
//!
//! Both are client-safe projections: the server never sends password hashes
//! or audit columns, and the client never needs them. The two areas keep
//! separate account pools, hence separate types and role sets.

use serde::{Deserialize, Serialize};

/// Role attached to an academy account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademyRole {
    Admin,
    Instructor,
    Student,
}

/// Authenticated academy user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademyUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AcademyRole,
}

impl AcademyUser {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Role attached to a shop account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopRole {
    Admin,
    User,
}

/// Authenticated shop user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: ShopRole,
}

impl ShopUser {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
