use serde::{Deserialize, Serialize};

// Request de login - comparación directa de credenciales
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

// Request para actualizar la cuenta del administrador.
// El username identifica la cuenta; email y password son opcionales.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
