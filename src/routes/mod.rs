//! Routers de la aplicación
//!
//! Arma el router principal: rutas públicas (health, auth) y rutas
//! protegidas por el middleware de autenticación.

pub mod auth_routes;
pub mod client_routes;
pub mod dashboard_routes;
pub mod rental_routes;
pub mod vehicle_routes;

use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/clients", client_routes::create_client_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/rentals", rental_routes::create_rental_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes::create_auth_router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Endpoint de liveness
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-rental",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
