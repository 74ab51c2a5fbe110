use crate::dto::asset_dto::{CreateAssetIssueRequest, UpdateAssetIssueRequest};
use crate::dto::common::ApiResponse;
use crate::models::asset_issue::AssetIssue;
use crate::repositories::asset_issue_repository::{build_asset_issue, AssetIssueRepository};
use crate::utils::errors::AppError;
use crate::utils::validation::{require_field, validate_serial_format, validate_uuid};
use sqlx::PgPool;
use validator::Validate;

pub struct AssetIssueController {
    repository: AssetIssueRepository,
}

impl AssetIssueController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AssetIssueRepository::new(pool),
        }
    }

    /// Crear una asignación nueva. No re-valida contra el registro (el
    /// caller hace el pre-flight con la puerta de validación); la
    /// restricción de unicidad del storage cierra la carrera entre
    /// validación y creación.
    pub async fn create(
        &self,
        request: CreateAssetIssueRequest,
    ) -> Result<ApiResponse<AssetIssue>, AppError> {
        request.validate()?;

        let employee_name = require_field(request.employee_name.as_deref(), "employee_name")?;
        let employee_code = require_field(request.employee_code.as_deref(), "employee_code")?;
        let serial_number = require_field(request.serial_number.as_deref(), "serial_number")?;

        validate_serial_format(&serial_number).map_err(|_| {
            AppError::ValidationError(format!("Número de serie inválido: '{}'", serial_number))
        })?;

        let issue = build_asset_issue(employee_name, employee_code, serial_number, request);
        let saved = self.repository.create(&issue).await?;

        Ok(ApiResponse::success_with_message(
            saved,
            "Asignación creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<AssetIssue>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<AssetIssue, AppError> {
        let issue_id = validate_uuid(id)
            .map_err(|_| AppError::ValidationError(format!("Id de asignación inválido: '{}'", id)))?;

        self.repository
            .find_by_id(issue_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset issue not found".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateAssetIssueRequest,
    ) -> Result<ApiResponse<AssetIssue>, AppError> {
        request.validate()?;

        let issue_id = validate_uuid(id)
            .map_err(|_| AppError::ValidationError(format!("Id de asignación inválido: '{}'", id)))?;

        let updated = self.repository.update(issue_id, &request).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Asignación actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let issue_id = validate_uuid(id)
            .map_err(|_| AppError::ValidationError(format!("Id de asignación inválido: '{}'", id)))?;

        self.repository.delete(issue_id).await
    }

    pub async fn find_by_employee(&self, search_term: &str) -> Result<AssetIssue, AppError> {
        let term = search_term.trim();
        if term.is_empty() {
            return Err(AppError::MissingRequiredField("search_term".to_string()));
        }

        self.repository
            .find_by_employee(term)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No issued asset found for this employee".to_string())
            })
    }
}
