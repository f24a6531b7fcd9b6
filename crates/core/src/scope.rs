//! Candidate targeting scope.
//!
//! At rest a rule row carries nullable `user_id` / `role` columns; in the
//! engine that pair becomes an explicit three-variant union so the ranking
//! switch is exhaustive and the mutual exclusivity is visible in the type.

use crate::types::DbId;

/// How specifically a candidate rule targets the requesting identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Applies only to one user.
    User(DbId),
    /// Applies to everyone holding a role.
    Role(String),
    /// Tenant-wide default.
    Unscoped,
}

/// Specificity score of a user-scoped match.
pub const SPECIFICITY_USER: u8 = 2;
/// Specificity score of a role-scoped match.
pub const SPECIFICITY_ROLE: u8 = 1;
/// Specificity score of an unscoped default.
pub const SPECIFICITY_UNSCOPED: u8 = 0;

impl Scope {
    /// Build a scope from the nullable storage columns.
    ///
    /// The schema forbids both columns being set; should a legacy row carry
    /// both anyway, the user column wins (it is the more specific claim).
    pub fn from_columns(user_id: Option<DbId>, role: Option<String>) -> Self {
        match (user_id, role) {
            (Some(id), _) => Scope::User(id),
            (None, Some(role)) => Scope::Role(role),
            (None, None) => Scope::Unscoped,
        }
    }

    /// Score this scope against a requesting identity.
    ///
    /// Returns `None` when the scope targets somebody else entirely — such
    /// a candidate is excluded from resolution, never treated as a weaker
    /// match (it must not mask a lower-specificity candidate).
    pub fn specificity(&self, user_id: Option<DbId>, role: Option<&str>) -> Option<u8> {
        match self {
            Scope::User(id) if Some(*id) == user_id => Some(SPECIFICITY_USER),
            Scope::Role(r) if Some(r.as_str()) == role => Some(SPECIFICITY_ROLE),
            Scope::Unscoped => Some(SPECIFICITY_UNSCOPED),
            _ => None,
        }
    }
}
