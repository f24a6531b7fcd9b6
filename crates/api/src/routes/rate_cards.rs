//! Route definitions for rate card administration.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rate_cards;
use crate::state::AppState;

/// Rate card routes mounted at `/rate-cards`.
///
/// ```text
/// GET  /                  -> list_rate_cards
/// POST /                  -> create_rate_card        (admin)
/// GET  /{id}/entries      -> list_entries
/// POST /{id}/entries      -> create_entry            (admin)
/// ```
pub fn rate_cards_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(rate_cards::list_rate_cards).post(rate_cards::create_rate_card),
        )
        .route(
            "/{id}/entries",
            get(rate_cards::list_entries).post(rate_cards::create_entry),
        )
}
