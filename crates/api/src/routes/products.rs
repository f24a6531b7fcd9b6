//! Route definitions for catalog product administration.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET  /                  -> list_products
/// POST /                  -> create_product          (admin)
/// GET  /{id}/variants     -> list_variants
/// POST /{id}/variants     -> create_variant          (admin)
/// ```
pub fn products_router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list_products).post(products::create_product))
        .route(
            "/{id}/variants",
            get(products::list_variants).post(products::create_variant),
        )
}
