use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::asset_issue_controller::AssetIssueController;
use crate::dto::asset_dto::{
    CreateAssetIssueRequest, EmployeeSearchQuery, UpdateAssetIssueRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::asset_issue::AssetIssue;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_asset_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_asset_issue))
        .route("/", get(list_asset_issues))
        .route("/by-employee", get(find_by_employee))
        .route("/:id", put(update_asset_issue))
        .route("/:id", delete(delete_asset_issue))
}

async fn create_asset_issue(
    State(state): State<AppState>,
    Json(request): Json<CreateAssetIssueRequest>,
) -> Result<Json<ApiResponse<AssetIssue>>, AppError> {
    let controller = AssetIssueController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_asset_issues(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetIssue>>, AppError> {
    let controller = AssetIssueController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn find_by_employee(
    State(state): State<AppState>,
    Query(query): Query<EmployeeSearchQuery>,
) -> Result<Json<ApiResponse<AssetIssue>>, AppError> {
    let controller = AssetIssueController::new(state.pool.clone());
    let issue = controller
        .find_by_employee(query.search_term.as_deref().unwrap_or(""))
        .await?;
    Ok(Json(ApiResponse::success(issue)))
}

async fn update_asset_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAssetIssueRequest>,
) -> Result<Json<ApiResponse<AssetIssue>>, AppError> {
    let controller = AssetIssueController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_asset_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AssetIssueController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Asignación eliminada exitosamente"
    })))
}
