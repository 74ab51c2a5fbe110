use crate::dto::common::ApiResponse;
use crate::dto::transfer_dto::TransferAssetRequest;
use crate::models::transfer_history::TransferHistoryEntry;
use crate::repositories::transfer_repository::TransferRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{require_field, validate_uuid};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

pub struct TransferController {
    repository: TransferRepository,
}

impl TransferController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TransferRepository::new(pool),
        }
    }

    pub async fn transfer(
        &self,
        request: TransferAssetRequest,
    ) -> Result<ApiResponse<TransferHistoryEntry>, AppError> {
        request.validate()?;

        // Los errores de validación se devuelven antes de mutar nada
        let issue_id_raw = require_field(request.asset_issue_id.as_deref(), "asset_issue_id")?;
        let employee_name_to =
            require_field(request.employee_name_to.as_deref(), "employee_name_to")?;
        let employee_code_to =
            require_field(request.employee_code_to.as_deref(), "employee_code_to")?;

        let issue_id = validate_uuid(&issue_id_raw).map_err(|_| {
            AppError::ValidationError(format!("Id de asignación inválido: '{}'", issue_id_raw))
        })?;

        let entry = self
            .repository
            .transfer(issue_id, &employee_name_to, &employee_code_to, request)
            .await?;

        info!(
            "🔄 Activo transferido: issue {} de '{}' a '{}'",
            issue_id,
            entry.employee_code_from.as_deref().unwrap_or("-"),
            entry.employee_code_to
        );

        Ok(ApiResponse::success_with_message(
            entry,
            "Activo transferido exitosamente".to_string(),
        ))
    }

    pub async fn list_history(&self) -> Result<Vec<TransferHistoryEntry>, AppError> {
        self.repository.list_history().await
    }
}
