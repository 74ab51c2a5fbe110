//! Modelo de RegisteredAsset
//!
//! Este módulo contiene el struct RegisteredAsset que mapea exactamente
//! a la tabla registered_assets. El número de serie es la identidad
//! natural del activo y es inmutable una vez registrado.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Activo registrado en el inventario - catálogo físico con metadatos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegisteredAsset {
    pub id: Uuid,
    pub asset_serial_no: String,
    pub asset_make: Option<String>,
    pub asset_model: Option<String>,
    pub vendor: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub warranty_end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl RegisteredAsset {
    pub fn new(
        asset_serial_no: String,
        asset_make: Option<String>,
        asset_model: Option<String>,
        vendor: Option<String>,
        registration_date: Option<NaiveDate>,
        warranty_end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset_serial_no,
            asset_make,
            asset_model,
            vendor,
            registration_date,
            warranty_end_date,
            created_at: Utc::now(),
        }
    }
}
