//! Modelo de Rental
//!
//! Este módulo contiene el struct Rental y sus variantes para CRUD operations.
//! Un alquiler referencia exactamente un cliente y un vehículo; ambos con
//! borrado en cascada a nivel de schema.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Estado del alquiler
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Activo,
    Finalizado,
    Cancelado,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Activo => "activo",
            RentalStatus::Finalizado => "finalizado",
            RentalStatus::Cancelado => "cancelado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "activo" => Some(RentalStatus::Activo),
            "finalizado" => Some(RentalStatus::Finalizado),
            "cancelado" => Some(RentalStatus::Cancelado),
            _ => None,
        }
    }
}

/// Rental principal - mapea exactamente a la tabla rentals
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub vehiculo_id: Uuid,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub total: Decimal,
    pub estado: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo alquiler
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRentalRequest {
    pub cliente_id: Uuid,
    pub vehiculo_id: Uuid,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub total: Decimal,
    pub estado: Option<RentalStatus>,
}

/// Request para actualizar un alquiler existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRentalRequest {
    pub cliente_id: Option<Uuid>,
    pub vehiculo_id: Option<Uuid>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub total: Option<Decimal>,
    pub estado: Option<RentalStatus>,
}

/// Response de alquiler para la API
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub vehiculo_id: Uuid,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub total: Decimal,
    pub estado: String,
    pub created_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id,
            cliente_id: rental.cliente_id,
            vehiculo_id: rental.vehiculo_id,
            fecha_inicio: rental.fecha_inicio,
            fecha_fin: rental.fecha_fin,
            total: rental.total,
            estado: rental.estado,
            created_at: rental.created_at,
        }
    }
}

/// Fila de listado con los datos del cliente y del vehículo resueltos
#[derive(Debug, Serialize, FromRow)]
pub struct RentalListRow {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub cliente_nombre: String,
    pub vehiculo_id: Uuid,
    pub vehiculo_marca: String,
    pub vehiculo_modelo: String,
    pub vehiculo_placa: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub total: Decimal,
    pub estado: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_status_roundtrip() {
        for (texto, estado) in [
            ("activo", RentalStatus::Activo),
            ("finalizado", RentalStatus::Finalizado),
            ("cancelado", RentalStatus::Cancelado),
        ] {
            assert_eq!(RentalStatus::parse(texto), Some(estado));
            assert_eq!(estado.as_str(), texto);
        }
        assert_eq!(RentalStatus::parse("pendiente"), None);
    }

    #[test]
    fn test_rental_status_deserializes_lowercase() {
        let estado: RentalStatus = serde_json::from_str("\"finalizado\"").unwrap();
        assert_eq!(estado, RentalStatus::Finalizado);
    }
}
