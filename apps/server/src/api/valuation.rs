use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use dealdesk_core::valuation::{calculate_valuation, ValuationInput, ValuationResult};

use crate::{error::ApiResult, main_lib::AppState};

async fn post_valuation(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ValuationInput>,
) -> ApiResult<Json<ValuationResult>> {
    let request = input.validate()?;
    let result = calculate_valuation(&request)?;
    state.simulate_latency().await;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/valuation", post(post_valuation))
}
