use std::sync::Arc;

use axum::{routing::get, Json, Router};
use dealdesk_core::client::HealthStatus;

use crate::main_lib::AppState;

async fn get_health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}
