//! Handlers for rate card administration.
//!
//! Thin CRUD over `RateCardRepo`: validate, check tenant ownership, forward.
//! The algorithmic work lives in the resolution path, not here.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tally_core::error::CoreError;
use tally_core::types::DbId;
use tally_db::models::rate_card::{CreateRateCard, CreateRateCardEntry};
use tally_db::repositories::RateCardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /rate-cards — list the tenant's rate cards.
pub async fn list_rate_cards(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
) -> AppResult<impl IntoResponse> {
    let cards = RateCardRepo::list_for_org(&state.pool, caller.org_id).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// POST /rate-cards — create a rate card (admin only).
pub async fn create_rate_card(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Json(input): Json<CreateRateCard>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let card = RateCardRepo::create(&state.pool, caller.org_id, &input).await?;

    tracing::info!(
        rate_card_id = card.id,
        org_id = caller.org_id,
        user_id = caller.user_id,
        "Rate card created",
    );
    Ok(Json(DataResponse { data: card }))
}

/// GET /rate-cards/{id}/entries — list a card's entries.
pub async fn list_entries(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Ownership check before touching entries; a foreign card is a 404.
    let card = RateCardRepo::find_by_id(&state.pool, caller.org_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "rate card",
            id,
        })?;

    let entries = RateCardRepo::list_entries(&state.pool, card.id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /rate-cards/{id}/entries — add an entry to a card (admin only).
pub async fn create_entry(
    State(state): State<AppState>,
    RequireAdmin(caller): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateRateCardEntry>,
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

    let card = RateCardRepo::find_by_id(&state.pool, caller.org_id, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "rate card",
            id,
        })?;

    let entry = RateCardRepo::create_entry(&state.pool, card.id, &input).await?;

    tracing::info!(
        entry_id = entry.id,
        rate_card_id = card.id,
        user_id = caller.user_id,
        "Rate card entry created",
    );
    Ok(Json(DataResponse { data: entry }))
}
