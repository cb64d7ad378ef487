use axum::extract::{Json, Path, State};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthUser, OwnerAccess, TenantAccess};
use crate::db;
use crate::error::ApiResult;
use crate::models::{InsertResponse, NewPayment, Payment};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// POST /create-payment-intent (auth). Returns the client secret the
/// frontend needs to complete the charge; nothing is persisted here.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(request): Json<CreateIntentRequest>,
) -> ApiResult<Json<CreateIntentResponse>> {
    let client_secret = state.stripe.create_intent(request.price).await?;
    Ok(Json(CreateIntentResponse { client_secret }))
}

/// GET /payments/owner/:email (Owner): payments received for an owner's houses.
pub async fn list_owner_payments(
    State(state): State<AppState>,
    _owner: OwnerAccess,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Payment>>> {
    Ok(Json(db::payments::list_by_owner(&state.db, &email).await?))
}

/// GET /payments/:email (Tenant): payments made by a tenant.
pub async fn list_tenant_payments(
    State(state): State<AppState>,
    _tenant: TenantAccess,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Payment>>> {
    Ok(Json(db::payments::list_by_tenant(&state.db, &email).await?))
}

/// POST /payments (auth, append-only). Recorded by the client after the
/// gateway confirms the charge.
pub async fn create_payment(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payment): Json<NewPayment>,
) -> ApiResult<Json<InsertResponse>> {
    let result = db::payments::insert(&state.db, &payment).await?;
    Ok(Json(result.into()))
}
