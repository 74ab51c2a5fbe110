use serde::Deserialize;

/// Request para enviar el correo de notificación de asignación.
/// El adjunto (formulario de entrega generado) viaja en base64 y es
/// opcional; el envío es fire-and-forget respecto del ciclo de vida.
#[derive(Debug, Deserialize)]
pub struct SendHandoverEmailRequest {
    pub issue_id: Option<String>,
    pub attachment_base64: Option<String>,
    pub attachment_filename: Option<String>,
}
