//! Handler del dashboard

use axum::{
    extract::{Extension, State},
    Json,
};

use crate::{
    middleware::auth::AuthenticatedUser,
    models::dashboard::DashboardResponse,
    services::dashboard_service::DashboardService,
    state::AppState,
    utils::errors::AppResult,
};

/// Resumen agregado del negocio
pub async fn get_dashboard(
    Extension(_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardResponse>> {
    let service = DashboardService::new(state.pool.clone());
    let summary = service.summary().await?;

    Ok(Json(summary))
}
