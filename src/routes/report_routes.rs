use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::ReportFilters;
use crate::models::asset_issue::AssetIssue;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/", get(generate_report))
}

async fn generate_report(
    State(state): State<AppState>,
    Query(filters): Query<ReportFilters>,
) -> Result<Json<Vec<AssetIssue>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.generate(filters).await?;
    Ok(Json(response))
}
