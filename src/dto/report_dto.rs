use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Filtros del reporte de asignaciones. Todos opcionales; se combinan
/// con AND. Las fechas van en formato YYYY-MM-DD y end_date es inclusiva
/// (internamente se consulta < end_date + 1 día).
#[derive(Debug, Deserialize)]
pub struct ReportFilters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub department: Option<String>,
    pub user: Option<String>,
}

/// Fila del resumen del dashboard: conteo por dispositivo y departamento.
/// Los activos sin asignar aparecen bajo el departamento "IT Stock".
#[derive(Debug, Serialize, FromRow)]
pub struct DashboardStatEntry {
    pub device: String,
    pub department: String,
    pub count: i64,
}

/// Fila de la distribución de activos para el gráfico de torta
#[derive(Debug, Serialize, FromRow)]
pub struct AssetDistributionEntry {
    pub category: String,
    pub count: i64,
}
