use serde::Deserialize;
use validator::Validate;

/// Request de transferencia de un activo entre empleados.
///
/// Los campos *_from son la instantánea del poseedor saliente que el
/// caller captura antes de enviar; los campos *_to describen al nuevo
/// poseedor. La fila de asset_issues identificada por asset_issue_id se
/// sobreescribe con los datos *_to y la instantánea completa queda en el
/// historial, todo dentro de la misma transacción.
#[derive(Debug, Deserialize, Validate)]
pub struct TransferAssetRequest {
    pub asset_issue_id: Option<String>,

    // Instantánea del poseedor saliente
    pub employee_name_from: Option<String>,
    pub employee_code_from: Option<String>,
    pub department_from: Option<String>,
    pub division_from: Option<String>,
    pub asset_type_from: Option<String>,
    pub asset_code_from: Option<String>,
    pub serial_number_from: Option<String>,

    // Nuevo poseedor
    pub employee_name_to: Option<String>,
    pub employee_code_to: Option<String>,
    #[validate(length(max = 100))]
    pub department_to: Option<String>,
    #[validate(length(max = 100))]
    pub division_to: Option<String>,
    #[validate(length(max = 100))]
    pub designation_to: Option<String>,
    #[validate(length(max = 100))]
    pub location_to: Option<String>,
    #[validate(length(max = 30))]
    pub phone_number_to: Option<String>,
    pub email_id_to: Option<String>,
    #[validate(length(max = 100))]
    pub hod_name_to: Option<String>,

    // Checklist de configuración tras el traspaso
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

    pub reason: Option<String>,
}
