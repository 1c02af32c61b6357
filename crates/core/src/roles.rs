//! Well-known role names and typed resolution.
//!
//! Role names must match the seed data in
//! `20260301000001_create_roles_and_users.sql`. The rest of the codebase
//! works with the [`Role`] enum; [`Role::from_name`] is the single place a
//! free-form claim string is turned into an authorization level.

use std::fmt;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Authorization level carried by a user's role claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Resolve a role name to a typed [`Role`]. Unknown names yield `None`
    /// rather than defaulting, so callers must decide how to reject them.
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            ROLE_ADMIN => Some(Role::Admin),
            ROLE_USER => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::User => ROLE_USER,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert_eq!(Role::from_name("admin"), Some(Role::Admin));
        assert_eq!(Role::from_name("user"), Some(Role::User));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Role::from_name("superuser"), None);
        assert_eq!(Role::from_name(""), None);
    }

    #[test]
    fn name_resolution_is_case_sensitive() {
        assert_eq!(Role::from_name("Admin"), None);
    }

    #[test]
    fn round_trips_through_as_str() {
        for role in [Role::Admin, Role::User] {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
        }
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }
}
