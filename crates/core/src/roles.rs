//! Role names as stored in `users.role`.
//!
//! These must match the values seeded by the external identity layer.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
