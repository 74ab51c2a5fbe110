use crate::dto::auth_dto::{LoginRequest, LoginResponse, UpdateAccountRequest};
use crate::dto::common::ApiResponse;
use crate::repositories::admin_repository::AdminRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_blank, require_field};
use sqlx::PgPool;

pub struct AuthController {
    repository: AdminRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AdminRepository::new(pool),
        }
    }

    // Chequeo de credenciales opaco: el resto del sistema solo depende
    // del resultado autorizado/no autorizado.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let username = require_field(request.username.as_deref(), "username")?;
        let password = require_field(request.password.as_deref(), "password")?;

        let admin = self
            .repository
            .find_by_credentials(&username, &password)
            .await?;

        match admin {
            Some(_) => Ok(LoginResponse {
                success: true,
                message: "Login successful!".to_string(),
            }),
            None => Err(AppError::Unauthorized("Invalid credentials".to_string())),
        }
    }

    pub async fn update_account(
        &self,
        request: UpdateAccountRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        let username = require_field(request.username.as_deref(), "username")?;

        let email = normalize_blank(request.email);
        let password = normalize_blank(request.password);

        if email.is_none() && password.is_none() {
            return Err(AppError::ValidationError(
                "No new data provided for update".to_string(),
            ));
        }

        self.repository
            .update_account(&username, email, password)
            .await?;

        Ok(ApiResponse {
            success: true,
            message: Some("Account updated successfully!".to_string()),
            data: None,
        })
    }
}
