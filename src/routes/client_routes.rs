use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::clients;
use crate::state::AppState;

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::get_clients))
        .route("/", post(clients::create_client))
        .route("/:id", get(clients::get_client))
        .route("/:id", put(clients::update_client))
        .route("/:id", delete(clients::delete_client))
}
