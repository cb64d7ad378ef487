use axum::extract::{Json, State};
use mongodb::bson::Document;

use crate::db;
use crate::error::ApiResult;
use crate::models::InsertResponse;
use crate::AppState;

/// GET /testimonials (open)
pub async fn list_testimonials(State(state): State<AppState>) -> ApiResult<Json<Vec<Document>>> {
    Ok(Json(db::testimonials::list_all(&state.db).await?))
}

/// POST /testimonials (open, append-only free-form record)
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(testimonial): Json<Document>,
) -> ApiResult<Json<InsertResponse>> {
    let result = db::testimonials::insert(&state.db, &testimonial).await?;
    Ok(Json(result.into()))
}
