use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::utils::errors::AppError;

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    /// Verificar si un email ya está registrado, opcionalmente excluyendo
    /// un cliente (para ediciones).
    pub async fn email_exists(&self, email: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn create(
        &self,
        nombre: String,
        email: String,
        telefono: String,
    ) -> Result<Client, AppError> {
        let id = Uuid::new_v4();

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, nombre, email, telefono, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        email: Option<String>,
        telefono: Option<String>,
    ) -> Result<Client, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET nombre = $2, email = $3, telefono = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(current.nombre))
        .bind(email.unwrap_or(current.email))
        .bind(telefono.unwrap_or(current.telefono))
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    /// Eliminar un cliente. Sus alquileres caen en cascada a nivel de schema.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        Ok(())
    }
}
