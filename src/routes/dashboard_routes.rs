use axum::{routing::get, Router};

use crate::api::dashboard;
use crate::state::AppState;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::get_dashboard))
}
