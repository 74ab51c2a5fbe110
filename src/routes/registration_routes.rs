use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::registration_controller::RegistrationController;
use crate::dto::common::ApiResponse;
use crate::dto::registration_dto::{RegisterAssetRequest, SerialValidationResponse};
use crate::models::registered_asset::RegisteredAsset;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_registration_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_asset))
        .route("/", get(list_registered_assets))
        .route("/validate/:serial", get(validate_serial))
}

async fn register_asset(
    State(state): State<AppState>,
    Json(request): Json<RegisterAssetRequest>,
) -> Result<Json<ApiResponse<RegisteredAsset>>, AppError> {
    let controller = RegistrationController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_registered_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegisteredAsset>>, AppError> {
    let controller = RegistrationController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

// Pre-flight del formulario de asignación: responde 200 con el estado
// del serial, las salidas "inválidas" son respuestas esperadas de la
// puerta, no errores.
async fn validate_serial(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<Json<SerialValidationResponse>, AppError> {
    let controller = RegistrationController::new(state.pool.clone());
    let response = controller.validate_serial(&serial).await?;
    Ok(Json(response))
}
