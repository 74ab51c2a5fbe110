use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::garbage_controller::GarbageController;
use crate::dto::common::ApiResponse;
use crate::dto::garbage_dto::MarkGarbageRequest;
use crate::models::garbage_asset::GarbageAsset;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_garbage_router() -> Router<AppState> {
    Router::new()
        .route("/", post(mark_as_garbage))
        .route("/", get(list_garbage_assets))
}

async fn mark_as_garbage(
    State(state): State<AppState>,
    Json(request): Json<MarkGarbageRequest>,
) -> Result<Json<ApiResponse<GarbageAsset>>, AppError> {
    let controller = GarbageController::new(state.pool.clone());
    let response = controller.mark_as_garbage(request).await?;
    Ok(Json(response))
}

async fn list_garbage_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<GarbageAsset>>, AppError> {
    let controller = GarbageController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
