//! Route definitions for catalog price quoting.

use axum::routing::post;
use axum::Router;

use crate::handlers::price;
use crate::state::AppState;

/// Price routes mounted at `/price`.
///
/// ```text
/// POST /quote             -> quote_unit_price
/// ```
pub fn price_router() -> Router<AppState> {
    Router::new().route("/quote", post(price::quote_unit_price))
}
