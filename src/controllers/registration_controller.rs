use crate::dto::common::ApiResponse;
use crate::dto::registration_dto::{RegisterAssetRequest, SerialValidationResponse};
use crate::models::registered_asset::RegisteredAsset;
use crate::repositories::asset_issue_repository::AssetIssueRepository;
use crate::repositories::garbage_repository::GarbageRepository;
use crate::repositories::registered_asset_repository::RegisteredAssetRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_blank, require_field, validate_date, validate_serial_format};
use sqlx::PgPool;
use validator::Validate;

pub struct RegistrationController {
    registry: RegisteredAssetRepository,
    issues: AssetIssueRepository,
    garbage: GarbageRepository,
}

impl RegistrationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            registry: RegisteredAssetRepository::new(pool.clone()),
            issues: AssetIssueRepository::new(pool.clone()),
            garbage: GarbageRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterAssetRequest,
    ) -> Result<ApiResponse<RegisteredAsset>, AppError> {
        request.validate()?;

        let serial = require_field(request.asset_serial_no.as_deref(), "asset_serial_no")?;
        validate_serial_format(&serial).map_err(|_| {
            AppError::ValidationError(format!("Número de serie inválido: '{}'", serial))
        })?;

        let registration_date = match normalize_blank(request.registration_date) {
            Some(value) => Some(validate_date(&value).map_err(|_| {
                AppError::ValidationError("registration_date debe ser YYYY-MM-DD".to_string())
            })?),
            None => None,
        };

        let warranty_end_date = match normalize_blank(request.warranty_end_date) {
            Some(value) => Some(validate_date(&value).map_err(|_| {
                AppError::ValidationError("warranty_end_date debe ser YYYY-MM-DD".to_string())
            })?),
            None => None,
        };

        // Los campos en blanco se normalizan a NULL, nunca a string vacío
        let asset = RegisteredAsset::new(
            serial,
            normalize_blank(request.asset_make),
            normalize_blank(request.asset_model),
            normalize_blank(request.vendor),
            registration_date,
            warranty_end_date,
        );

        let saved = self.registry.create(&asset).await?;

        Ok(ApiResponse::success_with_message(
            saved,
            "Activo registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<RegisteredAsset>, AppError> {
        self.registry.list_all().await
    }

    /// Puerta de validación previa a la asignación. El orden de chequeo
    /// importa: la baja es terminal y gana sobre cualquier otro estado,
    /// después el registro, después la asignación activa.
    pub async fn validate_serial(
        &self,
        serial: &str,
    ) -> Result<SerialValidationResponse, AppError> {
        let serial = serial.trim();
        if serial.is_empty() {
            return Err(AppError::MissingRequiredField("serial_number".to_string()));
        }

        if self.garbage.exists(serial).await? {
            return Ok(SerialValidationResponse::disposed(serial));
        }

        let registered = match self.registry.find_by_serial(serial).await? {
            Some(asset) => asset,
            None => return Ok(SerialValidationResponse::not_registered(serial)),
        };

        // En conflicto igual se devuelven los detalles para que el caller
        // pueda mostrar marca/modelo del activo.
        if self.issues.exists_by_serial(serial).await? {
            return Ok(SerialValidationResponse::already_issued(serial, registered));
        }

        Ok(SerialValidationResponse::available(registered))
    }
}

// Tests contra base real: cargo test -- --ignored --test-threads=1
#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::asset_issue_controller::AssetIssueController;
    use crate::controllers::garbage_controller::GarbageController;
    use crate::dto::garbage_dto::MarkGarbageRequest;
    use crate::dto::registration_dto::SerialValidationStatus;
    use crate::utils::test_support::{create_issue_request, test_pool, unique_serial};
    use serde_json::json;

    fn register_request(serial: &str) -> RegisterAssetRequest {
        serde_json::from_value(json!({
            "asset_serial_no": serial,
            "asset_make": "Dell",
            "asset_model": "Latitude 5440",
        }))
        .expect("valid register request")
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_validation_gate_reports_already_issued_with_details() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-001");

        let controller = RegistrationController::new(pool.clone());
        controller
            .register(register_request(&serial))
            .await
            .expect("register should succeed");

        // Recién registrado: disponible
        let before = controller.validate_serial(&serial).await.unwrap();
        assert!(before.valid);
        assert_eq!(before.status, SerialValidationStatus::Available);

        let issues = AssetIssueController::new(pool.clone());
        issues
            .create(create_issue_request("Empleado", "E100", &serial))
            .await
            .expect("issue should succeed");

        // Asignado: inválido pero con los detalles del registro
        let after = controller.validate_serial(&serial).await.unwrap();
        assert!(!after.valid);
        assert_eq!(after.status, SerialValidationStatus::AlreadyIssued);
        let details = after.details.expect("details should be present");
        assert_eq!(details.asset_make.as_deref(), Some("Dell"));
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_validation_gate_unknown_serial_is_not_registered() {
        let pool = test_pool().await;
        let controller = RegistrationController::new(pool.clone());

        let response = controller
            .validate_serial(&unique_serial("SN-GHOST"))
            .await
            .unwrap();
        assert!(!response.valid);
        assert_eq!(response.status, SerialValidationStatus::NotRegistered);
        assert!(response.details.is_none());
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_disposed_wins_over_every_other_state() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-TERM");

        // Dar de baja un serial que nunca estuvo registrado: la baja es
        // terminal y se chequea antes que el registro
        let garbage = GarbageController::new(pool.clone());
        let request: MarkGarbageRequest = serde_json::from_value(json!({
            "serial_number": serial,
            "date_marked_as_garbage": "2025-06-30",
        }))
        .expect("valid garbage request");
        garbage.mark_as_garbage(request).await.expect("disposal");

        let controller = RegistrationController::new(pool.clone());
        let response = controller.validate_serial(&serial).await.unwrap();
        assert!(!response.valid);
        assert_eq!(response.status, SerialValidationStatus::Disposed);
    }
}
