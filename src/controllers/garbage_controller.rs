use crate::dto::common::ApiResponse;
use crate::dto::garbage_dto::MarkGarbageRequest;
use crate::models::garbage_asset::GarbageAsset;
use crate::repositories::garbage_repository::GarbageRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_blank, require_field, validate_date};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

pub struct GarbageController {
    repository: GarbageRepository,
}

impl GarbageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GarbageRepository::new(pool),
        }
    }

    pub async fn mark_as_garbage(
        &self,
        request: MarkGarbageRequest,
    ) -> Result<ApiResponse<GarbageAsset>, AppError> {
        request.validate()?;

        let serial = require_field(request.serial_number.as_deref(), "serial_number")?;
        let date_raw = require_field(
            request.date_marked_as_garbage.as_deref(),
            "date_marked_as_garbage",
        )?;

        let date = validate_date(&date_raw).map_err(|_| {
            AppError::ValidationError("date_marked_as_garbage debe ser YYYY-MM-DD".to_string())
        })?;

        // Pre-chequeo amistoso; la PK del storage decide la carrera real
        if self.repository.exists(&serial).await? {
            return Err(AppError::AlreadyDisposed(serial));
        }

        let garbage = self
            .repository
            .mark_as_garbage(
                &serial,
                date,
                normalize_blank(request.asset_type),
                normalize_blank(request.assigned_department),
                normalize_blank(request.reason_for_disposal),
            )
            .await?;

        info!("🗑️ Activo dado de baja: {}", garbage.serial_number);

        Ok(ApiResponse::success_with_message(
            garbage,
            "Activo dado de baja exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<GarbageAsset>, AppError> {
        self.repository.list_all().await
    }
}
