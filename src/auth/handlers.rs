//! Token issuance endpoint.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

use super::jwt;

#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt: sign a one-hour session token for the supplied identity.
///
/// Issuance is open; every capability the token unlocks is still gated on
/// the role stored for that email, which the guards re-check per request.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<IssueTokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = jwt::create_token(&state.auth, &payload.email)
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e)))?;

    Ok(Json(TokenResponse { token }))
}
