//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//!
//! El campo `estado` es bookkeeping derivado: refleja si existe un alquiler
//! activo sobre el vehículo y solo lo escriben las operaciones del ciclo de
//! vida de alquileres. Ningún request de vehículos lo acepta.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(VehicleStatus::Available),
            "rented" => Some(VehicleStatus::Rented),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub placa: String,
    pub estado: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo vehículo
///
/// No expone `estado`: todo vehículo nace disponible.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub marca: String,

    #[validate(length(min = 1, max = 100))]
    pub modelo: String,

    #[validate(length(min = 5, max = 20), custom = "crate::utils::validation::validate_license_plate")]
    pub placa: String,
}

/// Request para actualizar un vehículo existente
///
/// Tampoco expone `estado`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: Option<String>,

    #[validate(length(min = 5, max = 20), custom = "crate::utils::validation::validate_license_plate")]
    pub placa: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub placa: String,
    pub estado: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            marca: vehicle.marca,
            modelo: vehicle.modelo,
            placa: vehicle.placa,
            estado: vehicle.estado,
            created_at: vehicle.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_status_roundtrip() {
        assert_eq!(VehicleStatus::parse("available"), Some(VehicleStatus::Available));
        assert_eq!(VehicleStatus::parse("rented"), Some(VehicleStatus::Rented));
        assert_eq!(VehicleStatus::Available.as_str(), "available");
        assert_eq!(VehicleStatus::Rented.as_str(), "rented");
        assert_eq!(VehicleStatus::parse("scrapped"), None);
    }
}
