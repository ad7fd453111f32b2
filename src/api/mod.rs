//! API endpoints
//!
//! Este módulo contiene los handlers HTTP de la API.

pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod rentals;
pub mod vehicles;
