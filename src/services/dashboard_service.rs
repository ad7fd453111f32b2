//! Servicio del dashboard
//!
//! Agregados de solo lectura calculados en cada consulta: conteos, ingresos
//! por alquileres finalizados y los vehículos más alquilados.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::dashboard::{DashboardResponse, TopRentedVehicle};
use crate::utils::errors::AppError;

pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn summary(&self) -> Result<DashboardResponse, AppError> {
        let total_clientes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;

        let total_vehiculos: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        let disponibles: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM vehicles WHERE estado = 'available'")
                .fetch_one(&self.pool)
                .await?;

        let alquilados: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE estado = 'activo'")
                .fetch_one(&self.pool)
                .await?;

        // COALESCE: sin alquileres finalizados los ingresos son 0, no NULL
        let ingresos_totales: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total), 0) FROM rentals WHERE estado = 'finalizado'",
        )
        .fetch_one(&self.pool)
        .await?;

        let mas_alquilados = sqlx::query_as::<_, TopRentedVehicle>(
            r#"
            SELECT v.marca, v.modelo, COUNT(r.id) AS total
            FROM rentals r
            JOIN vehicles v ON v.id = r.vehiculo_id
            GROUP BY v.marca, v.modelo
            ORDER BY total DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardResponse {
            total_clientes,
            total_vehiculos,
            disponibles,
            alquilados,
            ingresos_totales,
            mas_alquilados,
        })
    }
}
