//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y normalización de campos antes de persistir.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;
use validator::ValidationError;

use crate::utils::errors::AppError;

lazy_static! {
    /// Formato aceptado para números de serie: alfanumérico con guiones,
    /// barras y puntos (p. ej. "SN-001", "5CD1234XYZ", "PF/2T0123")
    static ref SERIAL_NUMBER_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9\-_/\.]*$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar el formato de un número de serie
pub fn validate_serial_format(value: &str) -> Result<(), ValidationError> {
    if !SERIAL_NUMBER_REGEX.is_match(value) {
        let mut error = ValidationError::new("serial_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Extraer un campo requerido, rechazando ausencia o blanco.
/// Un string de solo espacios cuenta como ausente.
pub fn require_field(value: Option<&str>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::MissingRequiredField(field.to_string())),
    }
}

/// Normalizar un campo opcional: blanco pasa a ser "sin valor" (NULL),
/// nunca se persiste el string vacío
pub fn normalize_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_present() {
        let value = require_field(Some("  E100 "), "employee_code").unwrap();
        assert_eq!(value, "E100");
    }

    #[test]
    fn test_require_field_absent() {
        let error = require_field(None, "serial_number").unwrap_err();
        match error {
            AppError::MissingRequiredField(field) => assert_eq!(field, "serial_number"),
            _ => panic!("expected MissingRequiredField"),
        }
    }

    #[test]
    fn test_require_field_blank_counts_as_absent() {
        assert!(require_field(Some("   "), "employee_name").is_err());
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_blank(Some("".to_string())), None);
        assert_eq!(normalize_blank(Some("   ".to_string())), None);
        assert_eq!(normalize_blank(None), None);
        assert_eq!(
            normalize_blank(Some(" Dell ".to_string())),
            Some("Dell".to_string())
        );
    }

    #[test]
    fn test_serial_format() {
        assert!(validate_serial_format("SN-001").is_ok());
        assert!(validate_serial_format("5CD1234XYZ").is_ok());
        assert!(validate_serial_format("PF/2T0123").is_ok());
        assert!(validate_serial_format("").is_err());
        assert!(validate_serial_format("-SN001").is_err());
        assert!(validate_serial_format("SN 001").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-06-30").is_ok());
        assert!(validate_date("30-06-2025").is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("not-a-uuid").is_err());
    }
}
