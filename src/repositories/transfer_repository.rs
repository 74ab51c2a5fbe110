use crate::dto::transfer_dto::TransferAssetRequest;
use crate::models::transfer_history::TransferHistoryEntry;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_blank;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TransferRepository {
    pool: PgPool,
}

impl TransferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Transferencia atómica: la mutación de asset_issues y el alta en
    /// transfer_history se confirman juntas o ninguna queda visible.
    /// El historial es el único rastro del poseedor anterior una vez que
    /// la fila de asignación se sobreescribe, así que perder la
    /// sincronía entre ambas escrituras corrompe la auditoría.
    pub async fn transfer(
        &self,
        asset_issue_id: Uuid,
        employee_name_to: &str,
        employee_code_to: &str,
        request: TransferAssetRequest,
    ) -> Result<TransferHistoryEntry, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::TransferFailed(format!("Error starting transaction: {}", e)))?;

        let now = Utc::now();

        let updated = sqlx::query(
            r#"
            UPDATE asset_issues SET
                employee_name = $2, employee_code = $3, department = $4,
                division = $5, designation = $6, location = $7,
                phone_number = $8, email_id = $9, hod_name = $10,
                operating_system = $11, printer_configured = $12,
                ms_office_version = $13, windows_update = $14,
                licensed_software_name = $15, local_admin_rights_removed = $16,
                antivirus = $17, local_admin_pass_set = $18, sap_configured = $19,
                backup_configured = $20, seven_zip = $21, chrome = $22,
                onedrive_configured = $23, laptop_bag = $24, rmm_agent = $25,
                cleaned = $26, physical_condition = $27, asset_tag = $28,
                previous_employee_code = $29, last_transfer_date = $30
            WHERE id = $1
            "#,
        )
        .bind(asset_issue_id)
        .bind(employee_name_to)
        .bind(employee_code_to)
        .bind(normalize_blank(request.department_to.clone()))
        .bind(normalize_blank(request.division_to.clone()))
        .bind(normalize_blank(request.designation_to))
        .bind(normalize_blank(request.location_to))
        .bind(normalize_blank(request.phone_number_to))
        .bind(normalize_blank(request.email_id_to))
        .bind(normalize_blank(request.hod_name_to))
        .bind(normalize_blank(request.operating_system))
        .bind(normalize_blank(request.printer_configured))
        .bind(normalize_blank(request.ms_office_version))
        .bind(normalize_blank(request.windows_update))
        .bind(normalize_blank(request.licensed_software_name))
        .bind(normalize_blank(request.local_admin_rights_removed))
        .bind(normalize_blank(request.antivirus))
        .bind(normalize_blank(request.local_admin_pass_set))
        .bind(normalize_blank(request.sap_configured))
        .bind(normalize_blank(request.backup_configured))
        .bind(normalize_blank(request.seven_zip))
        .bind(normalize_blank(request.chrome))
        .bind(normalize_blank(request.onedrive_configured))
        .bind(normalize_blank(request.laptop_bag))
        .bind(normalize_blank(request.rmm_agent))
        .bind(normalize_blank(request.cleaned))
        .bind(normalize_blank(request.physical_condition))
        .bind(normalize_blank(request.asset_tag))
        .bind(normalize_blank(request.employee_code_from.clone()))
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::TransferFailed(format!("Error updating asset issue: {}", e)))?;

        // Una actualización de 0 filas con alta de historial dejaría una
        // entrada huérfana en el libro mayor: se revierte todo.
        if updated.rows_affected() == 0 {
            let _ = tx.rollback().await;
            return Err(AppError::NotFound(format!(
                "Asset issue with id '{}' not found",
                asset_issue_id
            )));
        }

        let entry = sqlx::query_as::<_, TransferHistoryEntry>(
            r#"
            INSERT INTO transfer_history (
                id, asset_issue_id, asset_code, asset_type, serial_number,
                employee_name_from, employee_code_from, department_from, division_from,
                employee_name_to, employee_code_to, department_to, division_to,
                reason, transfer_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(asset_issue_id)
        .bind(normalize_blank(request.asset_code_from))
        .bind(normalize_blank(request.asset_type_from))
        .bind(normalize_blank(request.serial_number_from))
        .bind(normalize_blank(request.employee_name_from))
        .bind(normalize_blank(request.employee_code_from))
        .bind(normalize_blank(request.department_from))
        .bind(normalize_blank(request.division_from))
        .bind(employee_name_to)
        .bind(employee_code_to)
        .bind(normalize_blank(request.department_to))
        .bind(normalize_blank(request.division_to))
        .bind(normalize_blank(request.reason))
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::TransferFailed(format!("Error inserting history entry: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::TransferFailed(format!("Error committing transfer: {}", e)))?;

        Ok(entry)
    }

    pub async fn list_history(&self) -> Result<Vec<TransferHistoryEntry>, AppError> {
        let result = sqlx::query_as::<_, TransferHistoryEntry>(
            "SELECT * FROM transfer_history ORDER BY transfer_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing transfer history: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_issue(
        &self,
        asset_issue_id: Uuid,
    ) -> Result<Vec<TransferHistoryEntry>, AppError> {
        let result = sqlx::query_as::<_, TransferHistoryEntry>(
            "SELECT * FROM transfer_history WHERE asset_issue_id = $1 ORDER BY transfer_date DESC",
        )
        .bind(asset_issue_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing transfer history: {}", e)))?;

        Ok(result)
    }
}

// Tests contra base real: cargo test -- --ignored --test-threads=1
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset_issue::AssetIssue;
    use crate::repositories::asset_issue_repository::{build_asset_issue, AssetIssueRepository};
    use crate::utils::test_support::{create_issue_request, test_pool, transfer_request, unique_serial};
    use sqlx::PgPool;

    async fn seed_issue(pool: &PgPool, code: &str, serial: &str) -> AssetIssue {
        let repo = AssetIssueRepository::new(pool.clone());
        let request = create_issue_request("Empleado Saliente", code, serial);
        let issue = build_asset_issue(
            "Empleado Saliente".to_string(),
            code.to_string(),
            serial.to_string(),
            request,
        );
        repo.create(&issue).await.expect("seed issue")
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_transfer_updates_holder_and_writes_exactly_one_history_entry() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-002");
        let issue = seed_issue(&pool, "E200", &serial).await;

        let repo = TransferRepository::new(pool.clone());
        let request = transfer_request(
            &issue.id.to_string(),
            "E200",
            "Nuevo Poseedor",
            "E300",
            Some("role change"),
        );

        let entry = repo
            .transfer(issue.id, "Nuevo Poseedor", "E300", request)
            .await
            .expect("transfer should succeed");

        // La fila de asignación conserva su identidad y su serial; el
        // poseedor y el rastro del anterior quedan actualizados
        let issues = AssetIssueRepository::new(pool.clone());
        let updated = issues.find_by_id(issue.id).await.unwrap().unwrap();
        assert_eq!(updated.id, issue.id);
        assert_eq!(updated.serial_number, serial);
        assert_eq!(updated.employee_code, "E300");
        assert_eq!(updated.employee_name, "Nuevo Poseedor");
        assert_eq!(updated.previous_employee_code.as_deref(), Some("E200"));
        assert!(updated.last_transfer_date.is_some());

        // Exactamente una entrada en el historial para esta transferencia
        let history = repo.find_by_issue(issue.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, entry.id);
        assert_eq!(history[0].employee_code_from.as_deref(), Some("E200"));
        assert_eq!(history[0].employee_code_to, "E300");
        assert_eq!(history[0].reason.as_deref(), Some("role change"));
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_transfer_unknown_issue_rolls_back_without_history() {
        let pool = test_pool().await;
        let repo = TransferRepository::new(pool.clone());

        let ghost_id = Uuid::new_v4();
        let request = transfer_request(&ghost_id.to_string(), "E200", "Nadie", "E999", None);

        let result = repo.transfer(ghost_id, "Nadie", "E999", request).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // Sin entrada huérfana en el libro mayor
        let history = repo.find_by_issue(ghost_id).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL y correr con --test-threads=1"]
    async fn test_transfer_rolls_back_when_history_insert_fails() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-RB");
        let issue = seed_issue(&pool, "E200", &serial).await;

        // Simular la caída del store en la mitad del alta de historial:
        // la tabla desaparece después de que el UPDATE ya fue aplicado
        sqlx::query("ALTER TABLE transfer_history RENAME TO transfer_history_down")
            .execute(&pool)
            .await
            .expect("rename history table");

        let repo = TransferRepository::new(pool.clone());
        let request = transfer_request(
            &issue.id.to_string(),
            "E200",
            "Nuevo Poseedor",
            "E300",
            None,
        );
        let result = repo
            .transfer(issue.id, "Nuevo Poseedor", "E300", request)
            .await;

        sqlx::query("ALTER TABLE transfer_history_down RENAME TO transfer_history")
            .execute(&pool)
            .await
            .expect("restore history table");

        assert!(matches!(result, Err(AppError::TransferFailed(_))));

        // El estado previo quedó restaurado por completo: sin cambio de
        // poseedor y sin entrada de historial
        let issues = AssetIssueRepository::new(pool.clone());
        let current = issues.find_by_id(issue.id).await.unwrap().unwrap();
        assert_eq!(current.employee_code, "E200");
        assert_eq!(current.previous_employee_code, None);
        assert_eq!(current.last_transfer_date, None);

        let history = repo.find_by_issue(issue.id).await.unwrap();
        assert!(history.is_empty());
    }
}
