//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod client;
pub mod dashboard;
pub mod rental;
pub mod user;
pub mod vehicle;
