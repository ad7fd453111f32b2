use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::vehicles;
use crate::state::AppState;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicles::get_vehicles))
        .route("/", post(vehicles::create_vehicle))
        .route("/:id", get(vehicles::get_vehicle))
        .route("/:id", put(vehicles::update_vehicle))
        .route("/:id", delete(vehicles::delete_vehicle))
}
