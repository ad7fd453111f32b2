//! Servicio de autenticación
//!
//! Registro de cuentas (con su perfil), verificación de credenciales y
//! emisión de tokens JWT.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::models::user::{
    LoginRequest, LoginResponse, Profile, RegisterRequest, User, UserResponse,
};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthService {
    repository: UserRepository,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt: JwtConfig::from(config),
        }
    }

    /// Registrar una cuenta nueva junto con su perfil (rol `empleado`).
    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, AppError> {
        if self.repository.username_exists(&request.username).await? {
            return Err(validation_error("username", "el nombre de usuario ya está registrado"));
        }
        if self.repository.email_exists(&request.email).await? {
            return Err(validation_error("email", "el email ya está registrado"));
        }

        let password_hash = hash_password(&request.password)?;

        let (user, profile) = self
            .repository
            .create_with_profile(request.username, request.email, password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "usuario registrado");

        Ok(user_response(user, Some(profile)))
    }

    /// Verificar credenciales y emitir un token JWT.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &self.jwt)?;
        let expires_at =
            chrono::Utc::now() + chrono::Duration::seconds(self.jwt.expiration as i64);

        let profile = self.repository.find_profile(user.id).await?;

        tracing::info!(user_id = %user.id, "login exitoso");

        Ok(LoginResponse {
            token,
            expires_at,
            user: user_response(user, profile),
        })
    }
}

fn user_response(user: User, profile: Option<Profile>) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        is_admin: user.is_admin,
        rol: profile
            .map(|p| p.rol)
            .unwrap_or_else(|| "empleado".to_string()),
        created_at: user.created_at,
    }
}

/// Hash del password con bcrypt
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))
}

/// Verificar un password contra su hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    verify(password, password_hash)
        .map_err(|e| AppError::Hash(format!("Error verificando password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("secreto123").unwrap();
        assert_ne!(hash, "secreto123");
        assert!(verify_password("secreto123", &hash).unwrap());
        assert!(!verify_password("otro-password", &hash).unwrap());
    }
}
