use serde::Deserialize;
use validator::Validate;

/// Request para marcar un activo como chatarra (baja definitiva)
#[derive(Debug, Deserialize, Validate)]
pub struct MarkGarbageRequest {
    pub serial_number: Option<String>,

    /// Formato YYYY-MM-DD
    pub date_marked_as_garbage: Option<String>,

    #[validate(length(max = 100))]
    pub asset_type: Option<String>,

    #[validate(length(max = 100))]
    pub assigned_department: Option<String>,

    #[validate(length(max = 500))]
    pub reason_for_disposal: Option<String>,
}
