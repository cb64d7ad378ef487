use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::auth::{AdminAccess, AuthUser, Role};
use crate::db;
use crate::error::ApiResult;
use crate::models::{InsertResponse, NewUser, UpdateResponse, User};
use crate::AppState;

use super::parse_object_id;

/// GET /users (Admin)
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminAccess,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(db::users::list_all(&state.db).await?))
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: Option<Role>,
}

/// GET /users/verify/:email (open). Unknown emails answer `{"role": null}`.
pub async fn verify_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<RoleResponse>> {
    let role = db::users::find_role(&state.db, &email).await?;
    Ok(Json(RoleResponse { role }))
}

#[derive(Debug, Serialize)]
pub struct OwnerCheck {
    pub owner: bool,
}

/// GET /users/owner/:email (auth). A caller asking about someone else's
/// email is answered `false` without touching the store.
pub async fn check_owner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<OwnerCheck>> {
    if user.email != email {
        return Ok(Json(OwnerCheck { owner: false }));
    }

    let role = db::users::find_role(&state.db, &email).await?;
    Ok(Json(OwnerCheck {
        owner: role == Some(Role::Owner),
    }))
}

#[derive(Debug, Serialize)]
pub struct TenantCheck {
    pub tenant: bool,
}

/// GET /users/tenant/:email (auth)
pub async fn check_tenant(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<TenantCheck>> {
    if user.email != email {
        return Ok(Json(TenantCheck { tenant: false }));
    }

    let role = db::users::find_role(&state.db, &email).await?;
    Ok(Json(TenantCheck {
        tenant: role == Some(Role::Tenant),
    }))
}

#[derive(Debug, Serialize)]
pub struct AdminCheck {
    pub admin: bool,
}

/// GET /users/admin/:email (auth)
pub async fn check_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<AdminCheck>> {
    if user.email != email {
        return Ok(Json(AdminCheck { admin: false }));
    }

    let role = db::users::find_role(&state.db, &email).await?;
    Ok(Json(AdminCheck {
        admin: role == Some(Role::Admin),
    }))
}

/// POST /users (open). Idempotent by email: a repeat signup reports that the
/// user exists and leaves the existing record untouched.
pub async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Response> {
    let existing = db::users::find_by_email(&state.db, &new_user.email).await?;
    if existing.is_some() {
        return Ok(Json(json!({ "message": "Users Already Exists..." })).into_response());
    }

    let result = db::users::insert(&state.db, &new_user).await?;
    Ok(Json(InsertResponse::from(result)).into_response())
}

/// PATCH /users/:id (Admin). The only visible role mutation: promotion to Admin.
pub async fn promote_user(
    State(state): State<AppState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
) -> ApiResult<Json<UpdateResponse>> {
    let id = parse_object_id(&id, "user")?;
    let result = db::users::promote_to_admin(&state.db, id).await?;
    Ok(Json(result.into()))
}
