//! Ciclo de vida de alquileres
//!
//! Este servicio mantiene `vehicles.estado` consistente con los alquileres:
//! crear un alquiler marca el vehículo como alquilado, editarlo re-deriva el
//! estado del vehículo referenciado y eliminarlo lo libera. Cada operación
//! ejecuta el write del alquiler y el write del vehículo dentro de una misma
//! transacción; si algo falla no se aplica ninguno de los dos.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::rental::{
    CreateRentalRequest, Rental, RentalListRow, RentalStatus, UpdateRentalRequest,
};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation;

pub struct RentalService {
    pool: PgPool,
}

impl RentalService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<RentalListRow>, AppError> {
        let rentals = sqlx::query_as::<_, RentalListRow>(
            r#"
            SELECT r.id, r.cliente_id, c.nombre AS cliente_nombre,
                   r.vehiculo_id, v.marca AS vehiculo_marca,
                   v.modelo AS vehiculo_modelo, v.placa AS vehiculo_placa,
                   r.fecha_inicio, r.fecha_fin, r.total, r.estado
            FROM rentals r
            JOIN clients c ON c.id = r.cliente_id
            JOIN vehicles v ON v.id = r.vehiculo_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    /// Crear un alquiler y marcar el vehículo como alquilado.
    ///
    /// El vehículo queda `rented` sin importar el estado inicial del
    /// alquiler. Un alquiler que llega `activo` sobre un vehículo ya
    /// alquilado se rechaza con conflicto.
    pub async fn create(&self, request: CreateRentalRequest) -> Result<Rental, AppError> {
        validation::validate_date_range(request.fecha_inicio, request.fecha_fin).map_err(|_| {
            validation_error("fecha_fin", "la fecha fin no puede ser anterior a la fecha inicio")
        })?;
        validation::validate_non_negative(request.total)
            .map_err(|_| validation_error("total", "el total no puede ser negativo"))?;

        let estado = request.estado.unwrap_or(RentalStatus::Activo);

        let mut tx = self.pool.begin().await?;

        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(request.vehiculo_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| validation_error("vehiculo_id", "el vehículo no existe"))?;

        let cliente_existe: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                .bind(request.cliente_id)
                .fetch_one(&mut *tx)
                .await?;
        if !cliente_existe.0 {
            return Err(validation_error("cliente_id", "el cliente no existe"));
        }

        if estado == RentalStatus::Activo && vehicle.estado == VehicleStatus::Rented.as_str() {
            return Err(AppError::Conflict(
                "El vehículo ya tiene un alquiler activo".to_string(),
            ));
        }

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (id, cliente_id, vehiculo_id, fecha_inicio, fecha_fin, total, estado, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.cliente_id)
        .bind(request.vehiculo_id)
        .bind(request.fecha_inicio)
        .bind(request.fecha_fin)
        .bind(request.total)
        .bind(estado.as_str())
        .bind(chrono::Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET estado = $2 WHERE id = $1")
            .bind(request.vehiculo_id)
            .bind(VehicleStatus::Rented.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            rental_id = %rental.id,
            vehiculo_id = %rental.vehiculo_id,
            "alquiler creado, vehículo marcado como alquilado"
        );

        Ok(rental)
    }

    /// Editar un alquiler y re-derivar la disponibilidad del vehículo.
    ///
    /// Si la edición movió el alquiler a otro vehículo, el vehículo anterior
    /// se libera; el referenciado queda `rented` si el alquiler está
    /// `activo` y `available` en caso contrario.
    pub async fn update(&self, id: Uuid, request: UpdateRentalRequest) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Alquiler no encontrado".to_string()))?;

        let cliente_id = request.cliente_id.unwrap_or(current.cliente_id);
        let vehiculo_id = request.vehiculo_id.unwrap_or(current.vehiculo_id);
        let fecha_inicio = request.fecha_inicio.unwrap_or(current.fecha_inicio);
        let fecha_fin = request.fecha_fin.unwrap_or(current.fecha_fin);
        let total = request.total.unwrap_or(current.total);
        let estado = match request.estado {
            Some(estado) => estado,
            None => RentalStatus::parse(&current.estado).unwrap_or(RentalStatus::Activo),
        };

        validation::validate_date_range(fecha_inicio, fecha_fin).map_err(|_| {
            validation_error("fecha_fin", "la fecha fin no puede ser anterior a la fecha inicio")
        })?;
        validation::validate_non_negative(total)
            .map_err(|_| validation_error("total", "el total no puede ser negativo"))?;

        if cliente_id != current.cliente_id {
            let cliente_existe: (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                    .bind(cliente_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !cliente_existe.0 {
                return Err(validation_error("cliente_id", "el cliente no existe"));
            }
        }

        if vehiculo_id != current.vehiculo_id {
            let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
                .bind(vehiculo_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| validation_error("vehiculo_id", "el vehículo no existe"))?;

            if estado == RentalStatus::Activo && vehicle.estado == VehicleStatus::Rented.as_str() {
                return Err(AppError::Conflict(
                    "El vehículo ya tiene un alquiler activo".to_string(),
                ));
            }
        }

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET cliente_id = $2, vehiculo_id = $3, fecha_inicio = $4,
                fecha_fin = $5, total = $6, estado = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(cliente_id)
        .bind(vehiculo_id)
        .bind(fecha_inicio)
        .bind(fecha_fin)
        .bind(total)
        .bind(estado.as_str())
        .fetch_one(&mut *tx)
        .await?;

        // Liberar el vehículo anterior si la edición cambió la referencia
        if vehiculo_id != current.vehiculo_id {
            sqlx::query("UPDATE vehicles SET estado = $2 WHERE id = $1")
                .bind(current.vehiculo_id)
                .bind(VehicleStatus::Available.as_str())
                .execute(&mut *tx)
                .await?;
        }

        let nuevo_estado = if estado == RentalStatus::Activo {
            VehicleStatus::Rented
        } else {
            VehicleStatus::Available
        };

        sqlx::query("UPDATE vehicles SET estado = $2 WHERE id = $1")
            .bind(vehiculo_id)
            .bind(nuevo_estado.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            rental_id = %rental.id,
            vehiculo_id = %vehiculo_id,
            estado = estado.as_str(),
            "alquiler actualizado, disponibilidad sincronizada"
        );

        Ok(rental)
    }

    /// Eliminar un alquiler liberando antes su vehículo.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Alquiler no encontrado".to_string()))?;

        sqlx::query("UPDATE vehicles SET estado = $2 WHERE id = $1")
            .bind(rental.vehiculo_id)
            .bind(VehicleStatus::Available.as_str())
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            rental_id = %id,
            vehiculo_id = %rental.vehiculo_id,
            "alquiler eliminado, vehículo liberado"
        );

        Ok(())
    }
}
