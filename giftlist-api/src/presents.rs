use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use giftlist_core::{Present, PresentDraft, PresentUpdate};

use crate::{error::AppError, middleware::AdminSession, state::AppState};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePresentRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePresentRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Option<Vec<String>>,
    pub is_reserved: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub code: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/presents", get(list_presents).post(create_present))
        .route(
            "/presents/{id}",
            get(get_present).put(update_present).delete(delete_present),
        )
        .route("/presents/{id}/reserve", post(reserve_present))
}

// Structural validation only; business rules live behind the state's
// store and guard.
fn validate_fields(name: &str, description: &str, price: f64) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::ValidationError("Name is required".to_string()));
    }
    if description.trim().is_empty() {
        return Err(AppError::ValidationError("Description is required".to_string()));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::ValidationError(
            "Price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Public Handlers
// ============================================================================

/// GET /presents
pub async fn list_presents(
    State(state): State<AppState>,
) -> Result<Json<Vec<Present>>, AppError> {
    let presents = state.store.list_presents().await?;
    Ok(Json(presents))
}

/// GET /presents/{id}
pub async fn get_present(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Present>, AppError> {
    let present = state
        .store
        .get_present(id)
        .await?
        .ok_or_else(|| AppError::NotFoundError("Present not found".to_string()))?;

    Ok(Json(present))
}

/// POST /presents/{id}/reserve
pub async fn reserve_present(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReserveRequest>,
) -> Result<Json<Present>, AppError> {
    let present = state.reservations.reserve(id, &req.code).await?;
    Ok(Json(present))
}

// ============================================================================
// Admin Handlers
// ============================================================================

/// POST /presents
pub async fn create_present(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(req): Json<CreatePresentRequest>,
) -> Result<Json<Present>, AppError> {
    validate_fields(&req.name, &req.description, req.price)?;

    let present = state
        .store
        .create_present(PresentDraft {
            name: req.name,
            description: req.description,
            price: req.price,
            images: req.images.unwrap_or_default(),
        })
        .await?;

    Ok(Json(present))
}

/// PUT /presents/{id}
///
/// Full overwrite. Supplying `isReserved` is the administrative override
/// path and may reset a reservation; omitting it leaves the flag alone.
pub async fn update_present(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePresentRequest>,
) -> Result<Json<Present>, AppError> {
    validate_fields(&req.name, &req.description, req.price)?;

    let present = state
        .store
        .update_present(
            id,
            PresentUpdate {
                name: req.name,
                description: req.description,
                price: req.price,
                images: req.images.unwrap_or_default(),
                is_reserved: req.is_reserved,
            },
        )
        .await?;

    Ok(Json(present))
}

/// DELETE /presents/{id}
pub async fn delete_present(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.store.delete_present(id).await?;
    Ok(Json(json!({ "success": true })))
}
