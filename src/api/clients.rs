//! Handlers de Clients
//!
//! Este módulo maneja las operaciones CRUD para clientes. Crear requiere
//! autenticación; editar y eliminar requieren administrador.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    middleware::auth::{ensure_admin, AuthenticatedUser},
    models::client::{ClientResponse, CreateClientRequest, UpdateClientRequest},
    repositories::client_repository::ClientRepository,
    state::AppState,
    utils::errors::{validation_error, AppError, AppResult},
};

/// Listar todos los clientes
pub async fn get_clients(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClientResponse>>> {
    let repository = ClientRepository::new(state.pool.clone());
    let clients = repository.list().await?;

    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

/// Obtener un cliente por ID
pub async fn get_client(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ClientResponse>> {
    let repository = ClientRepository::new(state.pool.clone());
    let client = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

    Ok(Json(ClientResponse::from(client)))
}

/// Crear un nuevo cliente
pub async fn create_client(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(client_data): Json<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<ClientResponse>)> {
    client_data.validate().map_err(AppError::Validation)?;

    let repository = ClientRepository::new(state.pool.clone());

    if repository.email_exists(&client_data.email, None).await? {
        return Err(validation_error("email", "el email ya está registrado"));
    }

    let client = repository
        .create(client_data.nombre, client_data.email, client_data.telefono)
        .await?;

    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

/// Actualizar un cliente existente (solo administradores)
pub async fn update_client(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(client_data): Json<UpdateClientRequest>,
) -> AppResult<Json<ClientResponse>> {
    ensure_admin(&user)?;
    client_data.validate().map_err(AppError::Validation)?;

    let repository = ClientRepository::new(state.pool.clone());

    if let Some(email) = &client_data.email {
        if repository.email_exists(email, Some(id)).await? {
            return Err(validation_error("email", "el email ya está registrado"));
        }
    }

    let client = repository
        .update(id, client_data.nombre, client_data.email, client_data.telefono)
        .await?;

    Ok(Json(ClientResponse::from(client)))
}

/// Eliminar un cliente (solo administradores)
pub async fn delete_client(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ensure_admin(&user)?;

    let repository = ClientRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
