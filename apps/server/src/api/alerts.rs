use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use dealdesk_core::alerts::{AlertServiceTrait, AlertState, NewAlert};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn get_alerts(State(state): State<Arc<AppState>>) -> ApiResult<Json<AlertState>> {
    Ok(Json(state.alert_service.state()?))
}

async fn add_alert(
    State(state): State<Arc<AppState>>,
    Json(alert): Json<NewAlert>,
) -> ApiResult<Json<AlertState>> {
    if alert.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Alert message is required".to_string()));
    }
    let snapshot = state.alert_service.add_alert(alert.into())?;
    Ok(Json(snapshot))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/alerts", get(get_alerts).post(add_alert))
}
