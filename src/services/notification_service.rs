//! Servicio de notificaciones por correo
//!
//! Envía al empleado la notificación de asignación con el formulario de
//! entrega adjunto. Es fire-and-forget respecto del ciclo de vida: un
//! fallo de SMTP se reporta al caller pero nunca revierte el estado.

use crate::config::environment::EnvironmentConfig;
use crate::models::asset_issue::AssetIssue;
use crate::utils::errors::AppError;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

pub struct NotificationService {
    smtp_server: String,
    smtp_port: u16,
    credentials: Credentials,
    from_email: String,
    from_name: String,
}

impl NotificationService {
    /// Construir el servicio desde la configuración. Devuelve None si
    /// las variables SMTP no están configuradas: el resto del sistema
    /// funciona igual sin notificaciones.
    pub fn from_config(config: &EnvironmentConfig) -> Option<Self> {
        let smtp_server = config.smtp_server.clone()?;
        let smtp_username = config.smtp_username.clone()?;
        let smtp_password = config.smtp_password.clone()?;
        let from_email = config.smtp_from_email.clone()?;

        Some(Self {
            smtp_server,
            smtp_port: config.smtp_port,
            credentials: Credentials::new(smtp_username, smtp_password),
            from_email,
            from_name: config.smtp_from_name.clone(),
        })
    }

    // Un transporte nuevo por envío para evitar problemas de pooling
    fn build_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, AppError> {
        Ok(AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp_server)
            .map_err(|e| AppError::ExternalApi(format!("SMTP relay error: {}", e)))?
            .port(self.smtp_port)
            .credentials(self.credentials.clone())
            .build())
    }

    fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Enviar la notificación de asignación al empleado, con el
    /// formulario de entrega como adjunto opcional
    pub async fn send_issue_notification(
        &self,
        issue: &AssetIssue,
        attachment: Option<(String, Vec<u8>)>,
    ) -> Result<(), AppError> {
        let to_email = issue
            .email_id
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| {
                AppError::ValidationError(
                    "La asignación no tiene email_id para notificar".to_string(),
                )
            })?;

        let subject = format!(
            "IT Asset Handover - {} ({})",
            issue.asset_type.as_deref().unwrap_or("Asset"),
            issue.serial_number
        );

        let html_body = format!(
            r#"<p>Dear {name},</p>
<p>The following IT asset has been assigned to you:</p>
<ul>
  <li>Type: {asset_type}</li>
  <li>Serial Number: {serial}</li>
  <li>Asset Tag: {tag}</li>
</ul>
<p>Please review the attached handover form and keep it for your records.</p>
<p>IT Department</p>"#,
            name = issue.employee_name,
            asset_type = issue.asset_type.as_deref().unwrap_or("-"),
            serial = issue.serial_number,
            tag = issue.asset_tag.as_deref().unwrap_or("-"),
        );

        let builder = Message::builder()
            .from(
                self.from_header()
                    .parse()
                    .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::ValidationError(format!("Invalid email_id: {}", e)))?)
            .subject(subject);

        let html_part = SinglePart::builder()
            .header(ContentType::TEXT_HTML)
            .body(html_body);

        let message = match attachment {
            Some((filename, bytes)) => {
                let content_type = ContentType::parse(
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                )
                .map_err(|e| AppError::Internal(format!("Invalid content type: {}", e)))?;

                let attachment_part = Attachment::new(filename).body(bytes, content_type);

                builder
                    .multipart(
                        MultiPart::mixed()
                            .singlepart(html_part)
                            .singlepart(attachment_part),
                    )
                    .map_err(|e| AppError::Internal(format!("Error building email: {}", e)))?
            }
            None => builder
                .multipart(MultiPart::mixed().singlepart(html_part))
                .map_err(|e| AppError::Internal(format!("Error building email: {}", e)))?,
        };

        let transport = self.build_transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalApi(format!("SMTP send error: {}", e)))?;

        info!("📧 Notificación enviada a {}", to_email);

        Ok(())
    }
}
