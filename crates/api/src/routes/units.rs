//! Route definitions for unit-of-measure administration.

use axum::routing::get;
use axum::Router;

use crate::handlers::units;
use crate::state::AppState;

/// Unit routes mounted at `/units`.
///
/// ```text
/// GET  /                  -> list_units
/// POST /                  -> create_unit             (admin)
/// ```
pub fn units_router() -> Router<AppState> {
    Router::new().route("/", get(units::list_units).post(units::create_unit))
}
