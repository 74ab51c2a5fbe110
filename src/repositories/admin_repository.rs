use crate::models::admin::Admin;
use crate::utils::errors::{is_unique_violation, AppError};
use sqlx::PgPool;

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Puerta de credenciales opaca: igualdad directa contra la tabla.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Admin>, AppError> {
        let result = sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE username = $1 AND password = $2",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding admin: {}", e)))?;

        Ok(result)
    }

    pub async fn update_account(
        &self,
        username: &str,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Admin, AppError> {
        let result = sqlx::query_as::<_, Admin>(
            r#"
            UPDATE admins
            SET email = COALESCE($2, email), password = COALESCE($3, password)
            WHERE username = $1
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("This email is already in use by another account".to_string())
            } else {
                AppError::DatabaseError(format!("Error updating account: {}", e))
            }
        })?;

        result.ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }
}
