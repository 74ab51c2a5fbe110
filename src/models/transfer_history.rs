//! Modelo de TransferHistoryEntry
//!
//! Libro mayor append-only de transferencias. Cada entrada captura la
//! instantánea del poseedor anterior y del nuevo en el momento exacto de
//! la transferencia; una vez escrita no se actualiza ni se elimina.
//! asset_issue_id es una columna plana sin FK: el historial sobrevive a
//! la baja del activo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransferHistoryEntry {
    pub id: Uuid,
    pub asset_issue_id: Uuid,

    // Identificación del activo al momento de la transferencia
    pub asset_code: Option<String>,
    pub asset_type: Option<String>,
    pub serial_number: Option<String>,

    // Instantánea del poseedor anterior
    pub employee_name_from: Option<String>,
    pub employee_code_from: Option<String>,
    pub department_from: Option<String>,
    pub division_from: Option<String>,

    // Nuevo poseedor
    pub employee_name_to: String,
    pub employee_code_to: String,
    pub department_to: Option<String>,
    pub division_to: Option<String>,

    pub reason: Option<String>,
    pub transfer_date: DateTime<Utc>,
}
