use crate::dto::asset_dto::UpdateAssetIssueRequest;
use crate::models::asset_issue::AssetIssue;
use crate::utils::errors::{is_unique_violation, AppError};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct AssetIssueRepository {
    pool: PgPool,
}

impl AssetIssueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // La restricción UNIQUE sobre serial_number es la autoridad final:
    // si dos asignaciones compiten por la misma serie, la perdedora
    // recibe DuplicateSerial aunque su validación previa haya pasado.
    pub async fn create(&self, issue: &AssetIssue) -> Result<AssetIssue, AppError> {
        let result = sqlx::query_as::<_, AssetIssue>(
            r#"
            INSERT INTO asset_issues (
                id, serial_number,
                employee_name, employee_code, department, division, designation,
                location, phone_number, email_id, hod_name,
                asset_type, asset_code, issue_date_manual,
                operating_system, printer_configured, ms_office_version,
                windows_update, licensed_software_name, local_admin_rights_removed,
                antivirus, local_admin_pass_set, sap_configured, backup_configured,
                seven_zip, chrome, onedrive_configured, laptop_bag, rmm_agent,
                cleaned, physical_condition, asset_tag,
                previous_employee_code, last_transfer_date, created_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26,
                $27, $28, $29, $30, $31, $32, $33, $34, $35
            )
            RETURNING *
            "#,
        )
        .bind(issue.id)
        .bind(&issue.serial_number)
        .bind(&issue.employee_name)
        .bind(&issue.employee_code)
        .bind(&issue.department)
        .bind(&issue.division)
        .bind(&issue.designation)
        .bind(&issue.location)
        .bind(&issue.phone_number)
        .bind(&issue.email_id)
        .bind(&issue.hod_name)
        .bind(&issue.asset_type)
        .bind(&issue.asset_code)
        .bind(&issue.issue_date_manual)
        .bind(&issue.operating_system)
        .bind(&issue.printer_configured)
        .bind(&issue.ms_office_version)
        .bind(&issue.windows_update)
        .bind(&issue.licensed_software_name)
        .bind(&issue.local_admin_rights_removed)
        .bind(&issue.antivirus)
        .bind(&issue.local_admin_pass_set)
        .bind(&issue.sap_configured)
        .bind(&issue.backup_configured)
        .bind(&issue.seven_zip)
        .bind(&issue.chrome)
        .bind(&issue.onedrive_configured)
        .bind(&issue.laptop_bag)
        .bind(&issue.rmm_agent)
        .bind(&issue.cleaned)
        .bind(&issue.physical_condition)
        .bind(&issue.asset_tag)
        .bind(&issue.previous_employee_code)
        .bind(issue.last_transfer_date)
        .bind(issue.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateSerial(issue.serial_number.clone())
            } else {
                AppError::DatabaseError(format!("Error creating asset issue: {}", e))
            }
        })?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AssetIssue>, AppError> {
        let result = sqlx::query_as::<_, AssetIssue>("SELECT * FROM asset_issues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding asset issue: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_serial(&self, serial: &str) -> Result<Option<AssetIssue>, AppError> {
        let result =
            sqlx::query_as::<_, AssetIssue>("SELECT * FROM asset_issues WHERE serial_number = $1")
                .bind(serial)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error finding asset issue: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<AssetIssue>, AppError> {
        let result = sqlx::query_as::<_, AssetIssue>(
            "SELECT * FROM asset_issues ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing asset issues: {}", e)))?;

        Ok(result)
    }

    /// Asignación más reciente cuyo empleado coincide con el término de
    /// búsqueda (por nombre o por código)
    pub async fn find_by_employee(&self, search_term: &str) -> Result<Option<AssetIssue>, AppError> {
        let pattern = format!("%{}%", search_term);
        let result = sqlx::query_as::<_, AssetIssue>(
            r#"
            SELECT * FROM asset_issues
            WHERE employee_name ILIKE $1 OR employee_code ILIKE $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(pattern)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error searching asset issue: {}", e)))?;

        Ok(result)
    }

    // Edición parcial: los campos ausentes conservan el valor actual.
    // No es una transferencia, no escribe historial.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateAssetIssueRequest,
    ) -> Result<AssetIssue, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset issue not found".to_string()))?;

        let result = sqlx::query_as::<_, AssetIssue>(
            r#"
            UPDATE asset_issues SET
                employee_name = $2, employee_code = $3, department = $4,
                division = $5, designation = $6, location = $7,
                phone_number = $8, email_id = $9, hod_name = $10,
                asset_type = $11, asset_code = $12, issue_date_manual = $13,
                operating_system = $14, printer_configured = $15,
                ms_office_version = $16, windows_update = $17,
                licensed_software_name = $18, local_admin_rights_removed = $19,
                antivirus = $20, local_admin_pass_set = $21, sap_configured = $22,
                backup_configured = $23, seven_zip = $24, chrome = $25,
                onedrive_configured = $26, laptop_bag = $27, rmm_agent = $28,
                cleaned = $29, physical_condition = $30, asset_tag = $31
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.employee_name.clone().unwrap_or(current.employee_name))
        .bind(request.employee_code.clone().unwrap_or(current.employee_code))
        .bind(request.department.clone().or(current.department))
        .bind(request.division.clone().or(current.division))
        .bind(request.designation.clone().or(current.designation))
        .bind(request.location.clone().or(current.location))
        .bind(request.phone_number.clone().or(current.phone_number))
        .bind(request.email_id.clone().or(current.email_id))
        .bind(request.hod_name.clone().or(current.hod_name))
        .bind(request.asset_type.clone().or(current.asset_type))
        .bind(request.asset_code.clone().or(current.asset_code))
        .bind(request.issue_date_manual.clone().or(current.issue_date_manual))
        .bind(request.operating_system.clone().or(current.operating_system))
        .bind(request.printer_configured.clone().or(current.printer_configured))
        .bind(request.ms_office_version.clone().or(current.ms_office_version))
        .bind(request.windows_update.clone().or(current.windows_update))
        .bind(request.licensed_software_name.clone().or(current.licensed_software_name))
        .bind(request.local_admin_rights_removed.clone().or(current.local_admin_rights_removed))
        .bind(request.antivirus.clone().or(current.antivirus))
        .bind(request.local_admin_pass_set.clone().or(current.local_admin_pass_set))
        .bind(request.sap_configured.clone().or(current.sap_configured))
        .bind(request.backup_configured.clone().or(current.backup_configured))
        .bind(request.seven_zip.clone().or(current.seven_zip))
        .bind(request.chrome.clone().or(current.chrome))
        .bind(request.onedrive_configured.clone().or(current.onedrive_configured))
        .bind(request.laptop_bag.clone().or(current.laptop_bag))
        .bind(request.rmm_agent.clone().or(current.rmm_agent))
        .bind(request.cleaned.clone().or(current.cleaned))
        .bind(request.physical_condition.clone().or(current.physical_condition))
        .bind(request.asset_tag.clone().or(current.asset_tag))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating asset issue: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM asset_issues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting asset issue: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Asset issue not found".to_string()));
        }

        Ok(())
    }

    pub async fn exists_by_serial(&self, serial: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM asset_issues WHERE serial_number = $1)",
        )
        .bind(serial)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking serial number: {}", e)))?;

        Ok(result.0)
    }
}

/// Construir la fila de asignación a partir del request ya validado.
/// Los campos opcionales en blanco se normalizan a NULL antes de llegar
/// al storage.
pub fn build_asset_issue(
    employee_name: String,
    employee_code: String,
    serial_number: String,
    request: crate::dto::asset_dto::CreateAssetIssueRequest,
) -> AssetIssue {
    use crate::utils::validation::normalize_blank;

    AssetIssue {
        id: Uuid::new_v4(),
        serial_number,
        employee_name,
        employee_code,
        department: normalize_blank(request.department),
        division: normalize_blank(request.division),
        designation: normalize_blank(request.designation),
        location: normalize_blank(request.location),
        phone_number: normalize_blank(request.phone_number),
        email_id: normalize_blank(request.email_id),
        hod_name: normalize_blank(request.hod_name),
        asset_type: normalize_blank(request.asset_type),
        asset_code: normalize_blank(request.asset_code),
        issue_date_manual: normalize_blank(request.issue_date_manual),
        operating_system: normalize_blank(request.operating_system),
        printer_configured: normalize_blank(request.printer_configured),
        ms_office_version: normalize_blank(request.ms_office_version),
        windows_update: normalize_blank(request.windows_update),
        licensed_software_name: normalize_blank(request.licensed_software_name),
        local_admin_rights_removed: normalize_blank(request.local_admin_rights_removed),
        antivirus: normalize_blank(request.antivirus),
        local_admin_pass_set: normalize_blank(request.local_admin_pass_set),
        sap_configured: normalize_blank(request.sap_configured),
        backup_configured: normalize_blank(request.backup_configured),
        seven_zip: normalize_blank(request.seven_zip),
        chrome: normalize_blank(request.chrome),
        onedrive_configured: normalize_blank(request.onedrive_configured),
        laptop_bag: normalize_blank(request.laptop_bag),
        rmm_agent: normalize_blank(request.rmm_agent),
        cleaned: normalize_blank(request.cleaned),
        physical_condition: normalize_blank(request.physical_condition),
        asset_tag: normalize_blank(request.asset_tag),
        previous_employee_code: None,
        last_transfer_date: None,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::asset_dto::CreateAssetIssueRequest;
    use crate::utils::test_support::{create_issue_request, test_pool, unique_serial};

    fn empty_request() -> CreateAssetIssueRequest {
        CreateAssetIssueRequest {
            employee_name: None,
            employee_code: None,
            serial_number: None,
            department: Some("   ".to_string()),
            division: None,
            designation: None,
            location: None,
            phone_number: None,
            email_id: None,
            hod_name: None,
            asset_type: Some(" Laptop ".to_string()),
            asset_code: None,
            issue_date_manual: None,
            operating_system: None,
            printer_configured: None,
            ms_office_version: None,
            windows_update: None,
            licensed_software_name: None,
            local_admin_rights_removed: None,
            antivirus: None,
            local_admin_pass_set: None,
            sap_configured: None,
            backup_configured: None,
            seven_zip: None,
            chrome: None,
            onedrive_configured: None,
            laptop_bag: None,
            rmm_agent: None,
            cleaned: None,
            physical_condition: None,
            asset_tag: None,
        }
    }

    #[test]
    fn test_build_asset_issue_normalizes_blanks() {
        let issue = build_asset_issue(
            "Ana Pérez".to_string(),
            "E100".to_string(),
            "SN-001".to_string(),
            empty_request(),
        );

        assert_eq!(issue.serial_number, "SN-001");
        assert_eq!(issue.department, None);
        assert_eq!(issue.asset_type, Some("Laptop".to_string()));
        assert_eq!(issue.previous_employee_code, None);
        assert_eq!(issue.last_transfer_date, None);
    }

    // Tests contra base real: cargo test -- --ignored --test-threads=1

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_duplicate_serial_is_rejected_by_the_store() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-UNIQ");
        let repo = AssetIssueRepository::new(pool.clone());

        let first = build_asset_issue(
            "Primero".to_string(),
            "E100".to_string(),
            serial.clone(),
            create_issue_request("Primero", "E100", &serial),
        );
        repo.create(&first).await.expect("first issue should succeed");

        let second = build_asset_issue(
            "Segundo".to_string(),
            "E101".to_string(),
            serial.clone(),
            create_issue_request("Segundo", "E101", &serial),
        );
        let result = repo.create(&second).await;
        assert!(matches!(result, Err(AppError::DuplicateSerial(_))));
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_concurrent_issuance_leaves_at_most_one_active_issue() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-RACE");
        let repo_a = AssetIssueRepository::new(pool.clone());
        let repo_b = AssetIssueRepository::new(pool.clone());

        let issue_a = build_asset_issue(
            "Corredor A".to_string(),
            "E100".to_string(),
            serial.clone(),
            create_issue_request("Corredor A", "E100", &serial),
        );
        let issue_b = build_asset_issue(
            "Corredor B".to_string(),
            "E101".to_string(),
            serial.clone(),
            create_issue_request("Corredor B", "E101", &serial),
        );

        // Dos asignaciones compiten por la misma serie: el perdedor
        // recibe DuplicateSerial, nunca quedan dos filas
        let (result_a, result_b) =
            tokio::join!(repo_a.create(&issue_a), repo_b.create(&issue_b));
        let successes = [&result_a, &result_b]
            .iter()
            .filter(|r| r.is_ok())
            .count();
        assert_eq!(successes, 1);

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM asset_issues WHERE serial_number = $1")
                .bind(&serial)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count.0, 1);
    }
}
