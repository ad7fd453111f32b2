use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Verificar si una placa ya está registrada, opcionalmente excluyendo
    /// un vehículo (para ediciones).
    pub async fn placa_exists(&self, placa: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE placa = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(placa)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Todo vehículo se crea disponible; `estado` no es un campo de entrada.
    pub async fn create(
        &self,
        marca: String,
        modelo: String,
        placa: String,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, marca, modelo, placa, estado, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(marca)
        .bind(modelo)
        .bind(placa)
        .bind(VehicleStatus::Available.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Actualizar marca, modelo o placa. El `estado` queda fuera a propósito:
    /// solo lo sincroniza el ciclo de vida de alquileres.
    pub async fn update(
        &self,
        id: Uuid,
        marca: Option<String>,
        modelo: Option<String>,
        placa: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET marca = $2, modelo = $3, placa = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(marca.unwrap_or(current.marca))
        .bind(modelo.unwrap_or(current.modelo))
        .bind(placa.unwrap_or(current.placa))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Eliminar un vehículo. Sus alquileres caen en cascada a nivel de schema.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
