use axum::extract::{Json, State};
use mongodb::bson::Document;

use crate::db;
use crate::error::ApiResult;
use crate::AppState;

/// GET /agents (open, read-only collection seeded out of band)
pub async fn list_agents(State(state): State<AppState>) -> ApiResult<Json<Vec<Document>>> {
    Ok(Json(db::agents::list_all(&state.db).await?))
}
