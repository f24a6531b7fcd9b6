//! Route definitions for price book administration.

use axum::routing::get;
use axum::Router;

use crate::handlers::price_books;
use crate::state::AppState;

/// Price book routes mounted at `/price-books`.
///
/// ```text
/// GET  /                  -> list_price_books
/// POST /                  -> create_price_book       (admin)
/// GET  /{id}/entries      -> list_entries
/// POST /{id}/entries      -> create_entry            (admin)
/// ```
pub fn price_books_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(price_books::list_price_books).post(price_books::create_price_book),
        )
        .route(
            "/{id}/entries",
            get(price_books::list_entries).post(price_books::create_entry),
        )
}
