//! Modelo de Client
//!
//! Este módulo contiene el struct Client y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Client principal - mapea exactamente a la tabla clients
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 7, max = 20), custom = "crate::utils::validation::validate_phone")]
    pub telefono: String,
}

/// Request para actualizar un cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 7, max = 20), custom = "crate::utils::validation::validate_phone")]
    pub telefono: Option<String>,
}

/// Response de cliente para la API
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            nombre: client.nombre,
            email: client.email,
            telefono: client.telefono,
            created_at: client.created_at,
        }
    }
}
