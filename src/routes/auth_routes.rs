use axum::{routing::post, Router};

use crate::api::auth;
use crate::state::AppState;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}
