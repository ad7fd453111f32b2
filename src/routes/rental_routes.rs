use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::rentals;
use crate::state::AppState;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", get(rentals::get_rentals))
        .route("/", post(rentals::create_rental))
        .route("/:id", get(rentals::get_rental))
        .route("/:id", put(rentals::update_rental))
        .route("/:id", delete(rentals::delete_rental))
}
