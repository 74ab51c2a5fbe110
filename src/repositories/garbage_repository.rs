use crate::models::garbage_asset::GarbageAsset;
use crate::utils::errors::{is_unique_violation, AppError};
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

pub struct GarbageRepository {
    pool: PgPool,
}

impl GarbageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, serial: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM garbage_assets WHERE serial_number = $1)",
        )
        .bind(serial)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking garbage asset: {}", e)))?;

        Ok(result.0)
    }

    /// Baja atómica: alta en garbage_assets, eliminación de la asignación
    /// activa y eliminación del registro de inventario, las tres o ninguna.
    /// Un serial dado de baja no puede seguir apareciendo como disponible
    /// ni como asignado en el resto del sistema.
    pub async fn mark_as_garbage(
        &self,
        serial_number: &str,
        date_marked_as_garbage: NaiveDate,
        asset_type: Option<String>,
        assigned_department: Option<String>,
        reason_for_disposal: Option<String>,
    ) -> Result<GarbageAsset, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        // La PK sobre serial_number decide la carrera entre dos bajas
        // simultáneas: la perdedora recibe AlreadyDisposed.
        let garbage = sqlx::query_as::<_, GarbageAsset>(
            r#"
            INSERT INTO garbage_assets (
                serial_number, date_marked_as_garbage, asset_type,
                assigned_department, reason_for_disposal, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(serial_number)
        .bind(date_marked_as_garbage)
        .bind(asset_type)
        .bind(assigned_department)
        .bind(reason_for_disposal)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::AlreadyDisposed(serial_number.to_string())
            } else {
                AppError::DatabaseError(format!("Error inserting garbage asset: {}", e))
            }
        })?;

        sqlx::query("DELETE FROM asset_issues WHERE serial_number = $1")
            .bind(serial_number)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error removing asset issue: {}", e)))?;

        sqlx::query("DELETE FROM registered_assets WHERE asset_serial_no = $1")
            .bind(serial_number)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::DatabaseError(format!("Error removing registered asset: {}", e))
            })?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing disposal: {}", e)))?;

        Ok(garbage)
    }

    pub async fn list_all(&self) -> Result<Vec<GarbageAsset>, AppError> {
        let result = sqlx::query_as::<_, GarbageAsset>(
            "SELECT * FROM garbage_assets ORDER BY date_marked_as_garbage DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing garbage assets: {}", e)))?;

        Ok(result)
    }
}

// Tests contra base real: cargo test -- --ignored --test-threads=1
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registered_asset::RegisteredAsset;
    use crate::repositories::asset_issue_repository::{build_asset_issue, AssetIssueRepository};
    use crate::repositories::registered_asset_repository::RegisteredAssetRepository;
    use crate::utils::test_support::{create_issue_request, test_pool, unique_serial};

    fn disposal_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_disposal_rejects_second_marking() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-DUP");
        let repo = GarbageRepository::new(pool.clone());

        repo.mark_as_garbage(&serial, disposal_date(), None, None, None)
            .await
            .expect("first disposal should succeed");

        let second = repo
            .mark_as_garbage(&serial, disposal_date(), None, None, None)
            .await;
        assert!(matches!(second, Err(AppError::AlreadyDisposed(_))));

        // Exactamente una fila de baja para ese serial
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM garbage_assets WHERE serial_number = $1")
                .bind(&serial)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    #[ignore = "requiere DATABASE_URL"]
    async fn test_disposal_removes_issue_and_registry_atomically() {
        let pool = test_pool().await;
        let serial = unique_serial("SN-003");

        // Activo registrado y asignado
        let registry = RegisteredAssetRepository::new(pool.clone());
        registry
            .create(&RegisteredAsset::new(
                serial.clone(),
                Some("Dell".to_string()),
                Some("Latitude 5440".to_string()),
                None,
                None,
                None,
            ))
            .await
            .expect("register asset");

        let issues = AssetIssueRepository::new(pool.clone());
        let request = create_issue_request("Empleado", "E500", &serial);
        let issue = build_asset_issue(
            "Empleado".to_string(),
            "E500".to_string(),
            serial.clone(),
            request,
        );
        issues.create(&issue).await.expect("issue asset");

        let repo = GarbageRepository::new(pool.clone());
        repo.mark_as_garbage(
            &serial,
            disposal_date(),
            Some("Laptop".to_string()),
            Some("IT".to_string()),
            Some("end of life".to_string()),
        )
        .await
        .expect("disposal should succeed");

        // La baja es excluyente con la circulación y con el registro
        assert!(issues.find_by_serial(&serial).await.unwrap().is_none());
        assert!(registry.find_by_serial(&serial).await.unwrap().is_none());
        assert!(repo.exists(&serial).await.unwrap());
    }
}
