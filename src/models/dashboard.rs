//! Modelo del dashboard
//!
//! Resumen agregado de solo lectura, calculado en cada consulta.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Par (marca, modelo) con su cantidad de alquileres
#[derive(Debug, Serialize, FromRow)]
pub struct TopRentedVehicle {
    pub marca: String,
    pub modelo: String,
    pub total: i64,
}

/// Response del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_clientes: i64,
    pub total_vehiculos: i64,
    pub disponibles: i64,
    pub alquilados: i64,
    pub ingresos_totales: Decimal,
    pub mas_alquilados: Vec<TopRentedVehicle>,
}
