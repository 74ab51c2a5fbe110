//! Servicio de generación del formulario de entrega
//!
//! El servicio externo de plantillas consume un mapa plano de campos
//! (poseedor actual + checklist) y produce el documento binario. Este
//! módulo reenvía el mapa sin modificarlo y retransmite los bytes; nada
//! del núcleo depende de la salida.

use crate::utils::errors::AppError;
use serde_json::Value;
use tracing::info;

pub struct HandoverService {
    template_service_url: String,
    client: reqwest::Client,
}

impl HandoverService {
    pub fn new(template_service_url: String, client: reqwest::Client) -> Self {
        Self {
            template_service_url,
            client,
        }
    }

    /// Generar el formulario de entrega. `fields` es el mapa plano que
    /// llega del caller y viaja intacto al servicio de plantillas.
    pub async fn generate_handover_form(&self, fields: &Value) -> Result<Vec<u8>, AppError> {
        info!("📄 Generando formulario de entrega");

        let response = self
            .client
            .post(&self.template_service_url)
            .json(fields)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Template service error: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Template service returned status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Template service body error: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

/// Nombre de archivo para la descarga, derivado del employee_name del
/// mapa de campos (o "user" si no viene)
pub fn handover_filename(fields: &Value) -> String {
    let employee = fields
        .get("employee_name")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("user");

    format!("Handover_Form_{}.docx", employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_handover_filename_from_fields() {
        let fields = json!({ "employee_name": "Ana Pérez", "asset_tag": "GF-01" });
        assert_eq!(handover_filename(&fields), "Handover_Form_Ana Pérez.docx");
    }

    #[test]
    fn test_handover_filename_fallback() {
        let fields = json!({ "employee_name": "  " });
        assert_eq!(handover_filename(&fields), "Handover_Form_user.docx");
        assert_eq!(handover_filename(&json!({})), "Handover_Form_user.docx");
    }
}
