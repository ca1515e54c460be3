//! Health endpoint

use crate::state::AppState;
use axum::{extract::State, Json};
use landing_core::HealthStatus;
use std::sync::Arc;

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.health.report_now())
}
