//! Middleware de autenticación JWT
//!
//! Verifica el bearer token de cada request protegida y carga al usuario
//! desde la base de datos: la bandera `is_admin` se lee fresca en cada
//! request, nunca del token. Sin credenciales válidas la request se
//! redirige al login.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    models::user::User,
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{verify_token, JwtConfig},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthenticated("Token de autorización requerido".to_string()))?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)
        .map_err(|_| AppError::Unauthenticated("Token inválido".to_string()))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthenticated("ID de usuario inválido".to_string()))?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::Unauthenticated("Usuario no encontrado".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        user_id: user.id,
        username: user.username,
        is_admin: user.is_admin,
    };

    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

/// Verificación de administrador por operación.
///
/// El fallo no es un error visible: la respuesta es una redirección
/// silenciosa al dashboard.
pub fn ensure_admin(user: &AuthenticatedUser) -> Result<(), AppError> {
    if !user.is_admin {
        tracing::debug!(user = %user.username, "operación de admin denegada");
        return Err(AppError::PermissionDenied);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn test_user(is_admin: bool) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            username: "prueba".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_ensure_admin_allows_admin() {
        assert!(ensure_admin(&test_user(true)).is_ok());
    }

    #[test]
    fn test_ensure_admin_redirects_non_admin_to_dashboard() {
        let error = ensure_admin(&test_user(false)).unwrap_err();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            "/dashboard"
        );
    }
}
