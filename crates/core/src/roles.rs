//! Well-known role name constants.
//!
//! These must match the `users.role` CHECK constraint in the initial
//! migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_MEMBER: &str = "member";
