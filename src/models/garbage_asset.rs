//! Modelo de GarbageAsset
//!
//! Registro terminal de baja. La primary key sobre serial_number hace que
//! un activo solo pueda marcarse como chatarra una vez; su existencia
//! implica que ya no hay fila en asset_issues ni en registered_assets
//! para ese número de serie.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GarbageAsset {
    pub serial_number: String,
    pub date_marked_as_garbage: NaiveDate,
    pub asset_type: Option<String>,
    pub assigned_department: Option<String>,
    pub reason_for_disposal: Option<String>,
    pub created_at: DateTime<Utc>,
}
