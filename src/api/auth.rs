//! Handlers de autenticación
//!
//! Registro, login y logout. El logout es una confirmación sin estado:
//! el descarte del token corre por cuenta del cliente.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use validator::Validate;

use crate::{
    models::user::{LoginRequest, LoginResponse, RegisterRequest, UserResponse},
    services::auth_service::AuthService,
    state::AppState,
    utils::errors::{AppError, AppResult},
};

/// Registrar una cuenta nueva
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    request.validate().map_err(AppError::Validation)?;

    let service = AuthService::new(state.pool.clone(), &state.config);
    let user = service.register(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Login: verificar credenciales y emitir token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    request.validate().map_err(AppError::Validation)?;

    let service = AuthService::new(state.pool.clone(), &state.config);
    let response = service.login(request).await?;

    Ok(Json(response))
}

/// Logout sin estado
pub async fn logout() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Sesión cerrada"
    }))
}
