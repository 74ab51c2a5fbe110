use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::registered_asset::RegisteredAsset;

/// Request para registrar un activo nuevo en el inventario
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAssetRequest {
    pub asset_serial_no: Option<String>,

    #[validate(length(max = 100))]
    pub asset_make: Option<String>,

    #[validate(length(max = 100))]
    pub asset_model: Option<String>,

    #[validate(length(max = 100))]
    pub vendor: Option<String>,

    /// Formato YYYY-MM-DD
    pub registration_date: Option<String>,

    /// Formato YYYY-MM-DD
    pub warranty_end_date: Option<String>,
}

/// Estado de un número de serie frente a la puerta de validación de
/// asignación. La baja es terminal y gana sobre cualquier otro estado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerialValidationStatus {
    Available,
    Disposed,
    NotRegistered,
    AlreadyIssued,
}

/// Respuesta de la puerta de validación. `details` viaja también en el
/// caso already_issued para que el caller pueda mostrar marca/modelo.
#[derive(Debug, Serialize)]
pub struct SerialValidationResponse {
    pub valid: bool,
    pub status: SerialValidationStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<RegisteredAsset>,
}

impl SerialValidationResponse {
    pub fn available(details: RegisteredAsset) -> Self {
        Self {
            valid: true,
            status: SerialValidationStatus::Available,
            message: "El activo está disponible para asignación".to_string(),
            details: Some(details),
        }
    }

    pub fn disposed(serial: &str) -> Self {
        Self {
            valid: false,
            status: SerialValidationStatus::Disposed,
            message: format!("El número de serie '{}' fue dado de baja", serial),
            details: None,
        }
    }

    pub fn not_registered(serial: &str) -> Self {
        Self {
            valid: false,
            status: SerialValidationStatus::NotRegistered,
            message: format!("El número de serie '{}' no está registrado", serial),
            details: None,
        }
    }

    pub fn already_issued(serial: &str, details: RegisteredAsset) -> Self {
        Self {
            valid: false,
            status: SerialValidationStatus::AlreadyIssued,
            message: format!("El número de serie '{}' ya está asignado", serial),
            details: Some(details),
        }
    }
}
