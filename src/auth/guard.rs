//! Request-admission guards for protected routes.
//!
//! `AuthUser` is the base guard: it verifies the `Authorization: Bearer`
//! token and yields the caller identity. The three role guards compose on
//! top of it and re-resolve the caller's role from the users collection on
//! every request, so a role change takes effect immediately rather than
//! when the token expires.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::db;
use crate::error::ApiError;
use crate::AppState;

use super::jwt;
use super::types::{AuthUser, Role};

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Unauthorized Access..."))?;

        let claims = jwt::validate_token(&state.auth, &token)
            .map_err(|_| ApiError::unauthorized("Unauthorized Access..."))?;

        Ok(AuthUser { email: claims.sub })
    }
}

async fn require_role(
    parts: &mut Parts,
    state: &AppState,
    role: Role,
) -> Result<AuthUser, ApiError> {
    let user = AuthUser::from_request_parts(parts, state).await?;

    let resolved = db::users::find_role(&state.db, &user.email).await?;
    if resolved != Some(role) {
        return Err(ApiError::forbidden("Forbidden access"));
    }

    Ok(user)
}

/// Admits only callers whose stored role is `Tenant`.
pub struct TenantAccess(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for TenantAccess {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(TenantAccess(require_role(parts, state, Role::Tenant).await?))
    }
}

/// Admits only callers whose stored role is `Owner`.
pub struct OwnerAccess(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for OwnerAccess {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OwnerAccess(require_role(parts, state, Role::Owner).await?))
    }
}

/// Admits only callers whose stored role is `Admin`.
pub struct AdminAccess(pub AuthUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AdminAccess(require_role(parts, state, Role::Admin).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn missing_header_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn non_bearer_scheme_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
