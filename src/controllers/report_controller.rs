use crate::dto::report_dto::ReportFilters;
use crate::models::asset_issue::AssetIssue;
use crate::repositories::report_repository::ReportRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_blank, validate_date};
use sqlx::PgPool;

pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    pub async fn generate(&self, filters: ReportFilters) -> Result<Vec<AssetIssue>, AppError> {
        let start_date = match normalize_blank(filters.start_date) {
            Some(value) => Some(validate_date(&value).map_err(|_| {
                AppError::ValidationError("start_date debe ser YYYY-MM-DD".to_string())
            })?),
            None => None,
        };

        let end_date = match normalize_blank(filters.end_date) {
            Some(value) => Some(validate_date(&value).map_err(|_| {
                AppError::ValidationError("end_date debe ser YYYY-MM-DD".to_string())
            })?),
            None => None,
        };

        self.repository
            .filter_issues(
                start_date,
                end_date,
                normalize_blank(filters.department),
                normalize_blank(filters.user),
            )
            .await
    }
}
