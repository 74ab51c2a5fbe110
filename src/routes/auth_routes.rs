use axum::{
    extract::State,
    routing::{post, put},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, UpdateAccountRequest};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/account", put(update_account))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn update_account(
    State(state): State<AppState>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.update_account(request).await?;
    Ok(Json(response))
}
