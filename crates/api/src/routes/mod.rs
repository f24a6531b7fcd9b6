pub mod health;
pub mod price;
pub mod price_books;
pub mod products;
pub mod rate_cards;
pub mod rates;
pub mod units;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rates/resolve                      resolve a billing rate (POST)
/// /price/quote                        quote a catalog price (POST)
///
/// /rate-cards                         list, create (create: admin only)
/// /rate-cards/{id}/entries            list, add entry (add: admin only)
///
/// /price-books                        list, create (create: admin only)
/// /price-books/{id}/entries           list, add entry (add: admin only)
///
/// /units                              list, create (create: admin only)
/// /products                           list, create (create: admin only)
/// /products/{id}/variants             list, add variant (add: admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rates", rates::rates_router())
        .nest("/price", price::price_router())
        .nest("/rate-cards", rate_cards::rate_cards_router())
        .nest("/price-books", price_books::price_books_router())
        .nest("/units", units::units_router())
        .nest("/products", products::products_router())
}
