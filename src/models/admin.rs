//! Modelo de Admin
//!
//! Cuenta de administrador del dashboard. La autenticación es una
//! comparación directa de credenciales contra esta tabla.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub created_at: DateTime<Utc>,
}
