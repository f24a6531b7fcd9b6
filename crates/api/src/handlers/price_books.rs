//! Handlers for price book administration.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tally_core::error::CoreError;
use tally_core::types::DbId;
use tally_db::models::price_book::{CreatePriceBook, CreatePriceBookEntry};
use tally_db::repositories::PriceBookRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /price-books — list the tenant's price books.
pub async fn list_price_books(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let books = PriceBookRepo::list_for_org(&state.pool, caller.org_id).await?;
    Ok(Json(DataResponse { data: books }))
}

/// POST /price-books — create a price book (admin only).
pub async fn create_price_book(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Json(input): Json<CreatePriceBook>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let book = PriceBookRepo::create(&state.pool, caller.org_id, &input).await?;

    tracing::info!(
        price_book_id = book.id,
        org_id = caller.org_id,
        user_id = caller.user_id,
        "Price book created",
    );
    Ok(Json(DataResponse { data: book }))
}

/// GET /price-books/{id}/entries — list a book's entries.
pub async fn list_entries(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book = PriceBookRepo::find_by_id(&state.pool, caller.org_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "price book",
            id,
        })?;

    let entries = PriceBookRepo::list_entries(&state.pool, book.id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /price-books/{id}/entries — add an entry to a book (admin only).
pub async fn create_entry(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePriceBookEntry>,
) -> AppResult<impl IntoResponse> {
    if input.user_id.is_some() && input.role.is_some() {
        return Err(AppError::BadRequest(
            "an entry is scoped to a user or a role, not both".into(),
        ));
    }
    if let (Some(from), Some(to)) = (input.valid_from, input.valid_to) {
        if to <= from {
            return Err(AppError::BadRequest(
                "valid_to must be after valid_from".into(),
            ));
        }
    }

    let book = PriceBookRepo::find_by_id(&state.pool, caller.org_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "price book",
            id,
        })?;

    let entry = PriceBookRepo::create_entry(&state.pool, book.id, &input).await?;

    tracing::info!(
        entry_id = entry.id,
        price_book_id = book.id,
        user_id = caller.user_id,
        "Price book entry created",
    );
    Ok(Json(DataResponse { data: entry }))
}
