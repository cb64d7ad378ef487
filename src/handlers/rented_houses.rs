use axum::extract::{Json, Path, State};

use crate::auth::{AdminAccess, AuthUser};
use crate::db;
use crate::error::ApiResult;
use crate::models::{DeleteResponse, InsertResponse, NewRentedHouse, RentedHouse};
use crate::AppState;

use super::parse_object_id;

/// GET /rentedhouses (auth)
pub async fn list_rented_houses(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<Vec<RentedHouse>>> {
    Ok(Json(db::rented_houses::list_all(&state.db).await?))
}

/// GET /rentedhouses/:email (auth): rentals held by one renter.
pub async fn list_by_renter(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<RentedHouse>>> {
    Ok(Json(
        db::rented_houses::list_by_renter(&state.db, &email).await?,
    ))
}

/// POST /rentedhouses (auth): created on rental confirmation.
pub async fn create_rented_house(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(rented_house): Json<NewRentedHouse>,
) -> ApiResult<Json<InsertResponse>> {
    let result = db::rented_houses::insert(&state.db, &rented_house).await?;
    Ok(Json(result.into()))
}

/// DELETE /rentedhouses/:id (Admin)
pub async fn delete_rented_house(
    State(state): State<AppState>,
    _admin: AdminAccess,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_object_id(&id, "rented house")?;
    let result = db::rented_houses::delete(&state.db, id).await?;
    Ok(Json(result.into()))
}
