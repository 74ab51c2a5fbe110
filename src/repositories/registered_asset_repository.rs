use crate::models::registered_asset::RegisteredAsset;
use crate::utils::errors::{is_unique_violation, AppError};
use sqlx::PgPool;

pub struct RegisteredAssetRepository {
    pool: PgPool,
}

impl RegisteredAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, asset: &RegisteredAsset) -> Result<RegisteredAsset, AppError> {
        let result = sqlx::query_as::<_, RegisteredAsset>(
            r#"
            INSERT INTO registered_assets (
                id, asset_serial_no, asset_make, asset_model, vendor,
                registration_date, warranty_end_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(asset.id)
        .bind(&asset.asset_serial_no)
        .bind(&asset.asset_make)
        .bind(&asset.asset_model)
        .bind(&asset.vendor)
        .bind(asset.registration_date)
        .bind(asset.warranty_end_date)
        .bind(asset.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateSerial(asset.asset_serial_no.clone())
            } else {
                AppError::DatabaseError(format!("Error registering asset: {}", e))
            }
        })?;

        Ok(result)
    }

    pub async fn find_by_serial(&self, serial: &str) -> Result<Option<RegisteredAsset>, AppError> {
        let result = sqlx::query_as::<_, RegisteredAsset>(
            "SELECT * FROM registered_assets WHERE asset_serial_no = $1",
        )
        .bind(serial)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding registered asset: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<RegisteredAsset>, AppError> {
        let result = sqlx::query_as::<_, RegisteredAsset>(
            "SELECT * FROM registered_assets ORDER BY registration_date DESC NULLS LAST, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing registered assets: {}", e)))?;

        Ok(result)
    }
}
