//! Authentication and authorization for the API.
//!
//! This module provides:
//! - JWT token issuance and validation
//! - the `AuthUser` extractor for authenticated routes
//! - role guards (`TenantAccess`, `OwnerAccess`, `AdminAccess`) that
//!   re-check the caller's stored role on every request

mod guard;
mod handlers;
pub mod jwt;
pub mod types;

pub use guard::{AdminAccess, OwnerAccess, TenantAccess};
pub use handlers::issue_token;
pub use types::{AuthConfig, AuthUser, Role};
