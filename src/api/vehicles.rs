//! Handlers de Vehicles
//!
//! Este módulo maneja las operaciones CRUD para vehículos. Ningún handler
//! escribe `estado`: esa columna pertenece al ciclo de vida de alquileres.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    middleware::auth::{ensure_admin, AuthenticatedUser},
    models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse},
    repositories::vehicle_repository::VehicleRepository,
    state::AppState,
    utils::errors::{validation_error, AppError, AppResult},
};

/// Listar todos los vehículos
pub async fn get_vehicles(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<VehicleResponse>>> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicles = repository.list().await?;

    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// Obtener un vehículo por ID
pub async fn get_vehicle(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VehicleResponse>> {
    let repository = VehicleRepository::new(state.pool.clone());
    let vehicle = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

    Ok(Json(VehicleResponse::from(vehicle)))
}

/// Crear un nuevo vehículo
pub async fn create_vehicle(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(vehicle_data): Json<CreateVehicleRequest>,
) -> AppResult<(StatusCode, Json<VehicleResponse>)> {
    vehicle_data.validate().map_err(AppError::Validation)?;

    let repository = VehicleRepository::new(state.pool.clone());

    if repository.placa_exists(&vehicle_data.placa, None).await? {
        return Err(validation_error("placa", "la placa ya está registrada"));
    }

    let vehicle = repository
        .create(vehicle_data.marca, vehicle_data.modelo, vehicle_data.placa)
        .await?;

    Ok((StatusCode::CREATED, Json(VehicleResponse::from(vehicle))))
}

/// Actualizar un vehículo existente (solo administradores)
pub async fn update_vehicle(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(vehicle_data): Json<UpdateVehicleRequest>,
) -> AppResult<Json<VehicleResponse>> {
    ensure_admin(&user)?;
    vehicle_data.validate().map_err(AppError::Validation)?;

    let repository = VehicleRepository::new(state.pool.clone());

    if let Some(placa) = &vehicle_data.placa {
        if repository.placa_exists(placa, Some(id)).await? {
            return Err(validation_error("placa", "la placa ya está registrada"));
        }
    }

    let vehicle = repository
        .update(id, vehicle_data.marca, vehicle_data.modelo, vehicle_data.placa)
        .await?;

    Ok(Json(VehicleResponse::from(vehicle)))
}

/// Eliminar un vehículo (solo administradores)
pub async fn delete_vehicle(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ensure_admin(&user)?;

    let repository = VehicleRepository::new(state.pool.clone());
    repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
