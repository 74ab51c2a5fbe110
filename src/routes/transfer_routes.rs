use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::transfer_controller::TransferController;
use crate::dto::common::ApiResponse;
use crate::dto::transfer_dto::TransferAssetRequest;
use crate::models::transfer_history::TransferHistoryEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transfer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(transfer_asset))
        .route("/history", get(transfer_history))
}

async fn transfer_asset(
    State(state): State<AppState>,
    Json(request): Json<TransferAssetRequest>,
) -> Result<Json<ApiResponse<TransferHistoryEntry>>, AppError> {
    let controller = TransferController::new(state.pool.clone());
    let response = controller.transfer(request).await?;
    Ok(Json(response))
}

async fn transfer_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransferHistoryEntry>>, AppError> {
    let controller = TransferController::new(state.pool.clone());
    let response = controller.list_history().await?;
    Ok(Json(response))
}
