//! Handlers de Rentals
//!
//! Este módulo maneja las operaciones CRUD para alquileres. Toda mutación
//! pasa por RentalService, que sincroniza la disponibilidad del vehículo
//! dentro de la misma transacción.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    middleware::auth::{ensure_admin, AuthenticatedUser},
    models::rental::{CreateRentalRequest, RentalListRow, RentalResponse, UpdateRentalRequest},
    services::rental_service::RentalService,
    state::AppState,
    utils::errors::{AppError, AppResult},
};

/// Listar todos los alquileres con cliente y vehículo resueltos
pub async fn get_rentals(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RentalListRow>>> {
    let service = RentalService::new(state.pool.clone());
    let rentals = service.list().await?;

    Ok(Json(rentals))
}

/// Obtener un alquiler por ID
pub async fn get_rental(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RentalResponse>> {
    let service = RentalService::new(state.pool.clone());
    let rental = service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Alquiler no encontrado".to_string()))?;

    Ok(Json(RentalResponse::from(rental)))
}

/// Crear un nuevo alquiler (marca el vehículo como alquilado)
pub async fn create_rental(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(rental_data): Json<CreateRentalRequest>,
) -> AppResult<(StatusCode, Json<RentalResponse>)> {
    rental_data.validate().map_err(AppError::Validation)?;

    let service = RentalService::new(state.pool.clone());
    let rental = service.create(rental_data).await?;

    Ok((StatusCode::CREATED, Json(RentalResponse::from(rental))))
}

/// Actualizar un alquiler (solo administradores)
pub async fn update_rental(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(rental_data): Json<UpdateRentalRequest>,
) -> AppResult<Json<RentalResponse>> {
    ensure_admin(&user)?;
    rental_data.validate().map_err(AppError::Validation)?;

    let service = RentalService::new(state.pool.clone());
    let rental = service.update(id, rental_data).await?;

    Ok(Json(RentalResponse::from(rental)))
}

/// Eliminar un alquiler (solo administradores, libera el vehículo)
pub async fn delete_rental(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ensure_admin(&user)?;

    let service = RentalService::new(state.pool.clone());
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
