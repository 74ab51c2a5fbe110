use crate::dto::report_dto::{AssetDistributionEntry, DashboardStatEntry};
use crate::models::asset_issue::AssetIssue;
use crate::utils::errors::AppError;
use chrono::{Duration, NaiveDate, NaiveTime};
use sqlx::{PgPool, QueryBuilder};

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reporte de asignaciones filtrado por rango de fechas, departamento
    /// y empleado. end_date es inclusiva: se consulta contra el día
    /// siguiente exclusivo.
    pub async fn filter_issues(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        department: Option<String>,
        user: Option<String>,
    ) -> Result<Vec<AssetIssue>, AppError> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("SELECT * FROM asset_issues WHERE 1=1");

        if let Some(start) = start_date {
            builder.push(" AND created_at >= ");
            builder.push_bind(start.and_time(NaiveTime::MIN).and_utc());
        }

        if let Some(end) = end_date {
            let next_day = end + Duration::days(1);
            builder.push(" AND created_at < ");
            builder.push_bind(next_day.and_time(NaiveTime::MIN).and_utc());
        }

        if let Some(dept) = department {
            builder.push(" AND department ILIKE ");
            builder.push_bind(format!("%{}%", dept));
        }

        if let Some(term) = user {
            let pattern = format!("%{}%", term);
            builder.push(" AND (employee_name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR employee_code ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        builder.push(" ORDER BY created_at DESC");

        let result = builder
            .build_query_as::<AssetIssue>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error generating report: {}", e)))?;

        Ok(result)
    }

    /// Conteo de activos asignados por tipo de dispositivo y departamento
    pub async fn issued_stats(&self) -> Result<Vec<DashboardStatEntry>, AppError> {
        let result = sqlx::query_as::<_, DashboardStatEntry>(
            r#"
            SELECT
                COALESCE(asset_type, 'Unknown') AS device,
                COALESCE(department, 'Unassigned') AS department,
                COUNT(*) AS count
            FROM asset_issues
            GROUP BY device, department
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error computing issued stats: {}", e)))?;

        Ok(result)
    }

    /// Conteo de activos registrados sin asignación activa (stock IT).
    /// Un activo está disponible cuando no existe fila en asset_issues
    /// para su número de serie.
    pub async fn available_stats(&self) -> Result<Vec<DashboardStatEntry>, AppError> {
        let result = sqlx::query_as::<_, DashboardStatEntry>(
            r#"
            SELECT
                COALESCE(ra.asset_make, 'Unknown') AS device,
                'IT Stock'::text AS department,
                COUNT(*) AS count
            FROM registered_assets ra
            LEFT JOIN asset_issues ai ON ra.asset_serial_no = ai.serial_number
            WHERE ai.id IS NULL
            GROUP BY device
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error computing available stats: {}", e)))?;

        Ok(result)
    }

    /// Distribución de activos asignados por categoría para el gráfico
    /// de torta. Las variantes Laptop/Desktop se pliegan en un solo bucket.
    pub async fn asset_distribution(&self) -> Result<Vec<AssetDistributionEntry>, AppError> {
        let result = sqlx::query_as::<_, AssetDistributionEntry>(
            r#"
            SELECT
                CASE
                    WHEN asset_type IN ('Laptop', 'Desktop', 'Laptop/Desktop') THEN 'Laptops/Desktops'
                    WHEN asset_type = 'Data Card' THEN 'Data Cards'
                    WHEN asset_type = 'Printer' THEN 'Printers'
                    ELSE COALESCE(asset_type, 'Unknown Category')
                END AS category,
                COUNT(*) AS count
            FROM asset_issues
            GROUP BY category
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error computing distribution: {}", e)))?;

        Ok(result)
    }
}
