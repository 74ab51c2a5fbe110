use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::controllers::asset_issue_controller::AssetIssueController;
use crate::dto::common::ApiResponse;
use crate::dto::document_dto::SendHandoverEmailRequest;
use crate::services::handover_service::{handover_filename, HandoverService};
use crate::services::notification_service::NotificationService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::require_field;
use tracing::warn;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/handover-form", post(generate_handover_form))
        .route("/handover-email", post(send_handover_email))
}

// El mapa plano de campos del formulario viaja intacto al servicio de
// plantillas; el documento binario se retransmite como descarga.
async fn generate_handover_form(
    State(state): State<AppState>,
    Json(fields): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let template_url = state
        .config
        .template_service_url
        .clone()
        .ok_or_else(|| {
            AppError::ExternalApi("Template service is not configured".to_string())
        })?;

    let service = HandoverService::new(template_url, state.http_client.clone());
    let bytes = service.generate_handover_form(&fields).await?;

    let disposition = format!("attachment; filename={}", handover_filename(&fields));

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

// Fire-and-forget: el fallo de envío se reporta en la respuesta pero
// nunca afecta el estado del ciclo de vida del activo.
async fn send_handover_email(
    State(state): State<AppState>,
    Json(request): Json<SendHandoverEmailRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let issue_id = require_field(request.issue_id.as_deref(), "issue_id")?;

    let controller = AssetIssueController::new(state.pool.clone());
    let issue = controller.get_by_id(&issue_id).await?;

    let service = match NotificationService::from_config(&state.config) {
        Some(service) => service,
        None => {
            warn!("📧 SMTP no configurado, notificación omitida");
            return Ok(Json(ApiResponse::error(
                "Notificaciones deshabilitadas: SMTP no configurado".to_string(),
            )));
        }
    };

    let attachment = match request.attachment_base64 {
        Some(encoded) => {
            let bytes =
                base64::Engine::decode(&base64::engine::general_purpose::STANDARD, &encoded)
                    .map_err(|e| {
                        AppError::ValidationError(format!("Adjunto base64 inválido: {}", e))
                    })?;
            let filename = request
                .attachment_filename
                .unwrap_or_else(|| "Handover_Form.docx".to_string());
            Some((filename, bytes))
        }
        None => None,
    };

    match service.send_issue_notification(&issue, attachment).await {
        Ok(()) => Ok(Json(ApiResponse {
            success: true,
            message: Some("Notificación enviada exitosamente".to_string()),
            data: None,
        })),
        Err(e) => {
            warn!("📧 Error enviando notificación: {}", e);
            Ok(Json(ApiResponse::error(format!(
                "No se pudo enviar la notificación: {}",
                e
            ))))
        }
    }
}
