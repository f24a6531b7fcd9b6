//! Route definitions for billing-rate resolution.

use axum::routing::post;
use axum::Router;

use crate::handlers::rates;
use crate::state::AppState;

/// Rate routes mounted at `/rates`.
///
/// ```text
/// POST /resolve           -> resolve_rate
/// ```
pub fn rates_router() -> Router<AppState> {
    Router::new().route("/resolve", post(rates::resolve_rate))
}
