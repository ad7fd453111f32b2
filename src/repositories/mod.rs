//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula las queries SQL de una tabla. El ciclo de vida
//! de alquileres no vive aquí: cruza dos tablas y lo maneja RentalService.

pub mod client_repository;
pub mod user_repository;
pub mod vehicle_repository;
