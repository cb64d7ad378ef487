use axum::extract::{Json, Path, Query, State};
use serde::Deserialize;

use crate::auth::{AuthUser, OwnerAccess};
use crate::db;
use crate::error::ApiResult;
use crate::models::{
    DeleteResponse, House, InsertResponse, NewHouse, StatusUpdateRequest, UpdateHouseRequest,
    UpdateResponse,
};
use crate::AppState;

use super::parse_object_id;

#[derive(Debug, Deserialize)]
pub struct CityFilter {
    pub city: Option<String>,
}

/// GET /houses (open). `?city=` narrows to one city; no filter lists all.
pub async fn list_houses(
    State(state): State<AppState>,
    Query(filter): Query<CityFilter>,
) -> ApiResult<Json<Vec<House>>> {
    let houses = db::houses::list(&state.db, filter.city.as_deref()).await?;
    Ok(Json(houses))
}

#[derive(Debug, Deserialize)]
pub struct OwnerFilter {
    pub email: Option<String>,
}

/// GET /houses/user (Owner). A missing `?email=` answers an empty list.
pub async fn list_owner_houses(
    State(state): State<AppState>,
    _owner: OwnerAccess,
    Query(filter): Query<OwnerFilter>,
) -> ApiResult<Json<Vec<House>>> {
    let Some(email) = filter.email else {
        return Ok(Json(Vec::new()));
    };

    let houses = db::houses::list_by_owner(&state.db, &email).await?;
    Ok(Json(houses))
}

/// GET /houses/:id (open). An unknown id answers JSON `null` rather than 404,
/// preserving the original API's permissive lookup behavior.
pub async fn get_house(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<House>>> {
    let id = parse_object_id(&id, "house")?;
    let house = db::houses::find_by_id(&state.db, id).await?;
    Ok(Json(house))
}

/// POST /houses (Owner)
pub async fn create_house(
    State(state): State<AppState>,
    _owner: OwnerAccess,
    Json(new_house): Json<NewHouse>,
) -> ApiResult<Json<InsertResponse>> {
    let result = db::houses::insert(&state.db, &new_house).await?;
    Ok(Json(result.into()))
}

/// PATCH /houses/:id (Owner). Replaces the enumerated listing fields only.
pub async fn update_house(
    State(state): State<AppState>,
    _owner: OwnerAccess,
    Path(id): Path<String>,
    Json(request): Json<UpdateHouseRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    let id = parse_object_id(&id, "house")?;
    let result = db::houses::update_fields(&state.db, id, &request).await?;
    Ok(Json(result.into()))
}

/// PATCH /houses/status/:id. Deliberately authentication-gated only: any
/// signed-in identity may flip a listing's status (e.g. a tenant booking it).
pub async fn update_house_status(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    let id = parse_object_id(&id, "house")?;
    let result = db::houses::update_status(&state.db, id, &request.status).await?;
    Ok(Json(result.into()))
}

/// DELETE /houses/:id (Owner). Hard delete; payments and rental records that
/// reference the house are left in place by design.
pub async fn delete_house(
    State(state): State<AppState>,
    _owner: OwnerAccess,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_object_id(&id, "house")?;
    let result = db::houses::delete(&state.db, id).await?;
    Ok(Json(result.into()))
}
