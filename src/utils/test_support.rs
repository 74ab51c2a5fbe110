//! Soporte compartido para los tests que requieren base de datos.
//!
//! Estos helpers se usan desde los tests marcados con #[ignore]: corren
//! contra una base descartable apuntada por DATABASE_URL, con
//! `cargo test -- --ignored --test-threads=1`.

use crate::dto::asset_dto::CreateAssetIssueRequest;
use crate::dto::transfer_dto::TransferAssetRequest;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for DB tests");
    let pool = PgPool::connect(&url).await.expect("failed to connect to test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

/// Serial único por test para no chocar con datos de corridas previas
pub fn unique_serial(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

pub fn create_issue_request(
    employee_name: &str,
    employee_code: &str,
    serial_number: &str,
) -> CreateAssetIssueRequest {
    serde_json::from_value(json!({
        "employee_name": employee_name,
        "employee_code": employee_code,
        "serial_number": serial_number,
        "department": "IT",
        "asset_type": "Laptop",
    }))
    .expect("valid create request")
}

pub fn transfer_request(
    asset_issue_id: &str,
    from_code: &str,
    to_name: &str,
    to_code: &str,
    reason: Option<&str>,
) -> TransferAssetRequest {
    serde_json::from_value(json!({
        "asset_issue_id": asset_issue_id,
        "employee_name_from": "Empleado Saliente",
        "employee_code_from": from_code,
        "department_from": "IT",
        "employee_name_to": to_name,
        "employee_code_to": to_code,
        "department_to": "Finance",
        "reason": reason,
    }))
    .expect("valid transfer request")
}
