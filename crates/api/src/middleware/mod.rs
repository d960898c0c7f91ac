//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user and resolves their role.
//! - [`rbac::RequireSuperAdmin`] -- Requires the super-admin flag.
//! - [`rbac::RequireManager`] -- Requires a manager or super-admin.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.

pub mod auth;
pub mod rbac;
