//! Modelo de AssetIssue
//!
//! Este módulo contiene el struct AssetIssue que mapea exactamente a la
//! tabla asset_issues. La fila representa al poseedor actual del activo:
//! el id es estable durante toda la vida en circulación (una transferencia
//! muta esta fila, nunca crea una segunda) y la restricción UNIQUE sobre
//! serial_number garantiza a lo sumo una asignación activa por serie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Asignación activa de un activo a un empleado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetIssue {
    pub id: Uuid,
    pub serial_number: String,

    // Poseedor actual
    pub employee_name: String,
    pub employee_code: String,
    pub department: Option<String>,
    pub division: Option<String>,
    pub designation: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub email_id: Option<String>,
    pub hod_name: Option<String>,

    // Identificación del activo
    pub asset_type: Option<String>,
    pub asset_code: Option<String>,
    pub issue_date_manual: Option<String>,

    // Checklist de configuración
    pub operating_system: Option<String>,
    pub printer_configured: Option<String>,
    pub ms_office_version: Option<String>,
    pub windows_update: Option<String>,
    pub licensed_software_name: Option<String>,
    pub local_admin_rights_removed: Option<String>,
    pub antivirus: Option<String>,
    pub local_admin_pass_set: Option<String>,
    pub sap_configured: Option<String>,
    pub backup_configured: Option<String>,
    pub seven_zip: Option<String>,
    pub chrome: Option<String>,
    pub onedrive_configured: Option<String>,
    pub laptop_bag: Option<String>,
    pub rmm_agent: Option<String>,
    pub cleaned: Option<String>,
    pub physical_condition: Option<String>,
    pub asset_tag: Option<String>,

    // Rastro del poseedor anterior tras una transferencia
    pub previous_employee_code: Option<String>,
    pub last_transfer_date: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}
