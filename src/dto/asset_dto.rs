use serde::Deserialize;
use validator::Validate;

/// Request para crear una asignación de activo.
/// Los campos requeridos se verifican explícitamente en el controller
/// para poder responder MISSING_REQUIRED_FIELD con el nombre del campo.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssetIssueRequest {
    pub employee_name: Option<String>,
    pub employee_code: Option<String>,
    pub serial_number: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,
    #[validate(length(max = 100))]
    pub division: Option<String>,
    #[validate(length(max = 100))]
    pub designation: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[validate(length(max = 30))]
    pub phone_number: Option<String>,
    pub email_id: Option<String>,
    #[validate(length(max = 100))]
    pub hod_name: Option<String>,

    pub asset_type: Option<String>,
    pub asset_code: Option<String>,
    pub issue_date_manual: Option<String>,

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
}

/// Request para edición parcial de una asignación existente.
/// Una edición no es una transferencia: no toca previous_employee_code,
/// ni last_transfer_date, ni produce entrada en el historial.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssetIssueRequest {
    pub employee_name: Option<String>,
    pub employee_code: Option<String>,

    #[validate(length(max = 100))]
    pub department: Option<String>,
    #[validate(length(max = 100))]
    pub division: Option<String>,
    #[validate(length(max = 100))]
    pub designation: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[validate(length(max = 30))]
    pub phone_number: Option<String>,
    pub email_id: Option<String>,
    #[validate(length(max = 100))]
    pub hod_name: Option<String>,

    pub asset_type: Option<String>,
    pub asset_code: Option<String>,
    pub issue_date_manual: Option<String>,

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
}

/// Query de búsqueda de asignación por empleado
#[derive(Debug, Deserialize)]
pub struct EmployeeSearchQuery {
    pub search_term: Option<String>,
}
