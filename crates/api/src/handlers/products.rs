//! Handlers for catalog product administration.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tally_core::error::CoreError;
use tally_core::types::DbId;
use tally_db::models::product::{CreateProduct, CreateProductVariant};
use tally_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /products — list the tenant's active products.
pub async fn list_products(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list_for_org(&state.pool, caller.org_id).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /products — create a product (admin only).
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    if input.sku.trim().is_empty() || input.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "sku and name must not be empty".into(),
        ));
    }

    let product = ProductRepo::create(&state.pool, caller.org_id, &input).await?;

    tracing::info!(
        product_id = product.id,
        org_id = caller.org_id,
        user_id = caller.user_id,
        "Product created",
    );
    Ok(Json(DataResponse { data: product }))
}

/// GET /products/{id}/variants — list a product's variants.
pub async fn list_variants(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, caller.org_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "product",
            id,
        })?;

    let variants = ProductRepo::list_variants(&state.pool, product.id).await?;
    Ok(Json(DataResponse { data: variants }))
}

/// POST /products/{id}/variants — add a variant (admin only).
pub async fn create_variant(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProductVariant>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let product = ProductRepo::find_by_id(&state.pool, caller.org_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "product",
            id,
        })?;

    let variant = ProductRepo::create_variant(&state.pool, product.id, &input).await?;

    tracing::info!(
        variant_id = variant.id,
        product_id = product.id,
        user_id = caller.user_id,
        "Product variant created",
    );
    Ok(Json(DataResponse { data: variant }))
}
