//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Los servicios
//! encapsulan operaciones que involucran múltiples modelos, en particular la
//! sincronización entre alquileres y disponibilidad de vehículos.

pub mod auth_service;
pub mod dashboard_service;
pub mod rental_service;
