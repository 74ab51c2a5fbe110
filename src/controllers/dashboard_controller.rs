use crate::dto::report_dto::{AssetDistributionEntry, DashboardStatEntry};
use crate::repositories::report_repository::ReportRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct DashboardController {
    repository: ReportRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    /// Resumen del dashboard: asignados por tipo/departamento más el
    /// stock disponible (registrados sin asignación activa), combinados
    /// en una sola lista como espera el frontend.
    pub async fn stats(&self) -> Result<Vec<DashboardStatEntry>, AppError> {
        let (issued, available) = futures::try_join!(
            self.repository.issued_stats(),
            self.repository.available_stats(),
        )?;

        let mut combined = issued;
        combined.extend(available);

        Ok(combined)
    }

    pub async fn distribution(&self) -> Result<Vec<AssetDistributionEntry>, AppError> {
        self.repository.asset_distribution().await
    }
}
