use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::report_dto::{AssetDistributionEntry, DashboardStatEntry};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/distribution", get(asset_distribution))
}

async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<DashboardStatEntry>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.stats().await?;
    Ok(Json(response))
}

async fn asset_distribution(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetDistributionEntry>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.distribution().await?;
    Ok(Json(response))
}
