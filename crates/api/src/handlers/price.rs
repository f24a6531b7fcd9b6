//! Handler for catalog price quoting.
//!
//! Same resolution engine as the rates path, fed from price-book entries
//! and wrapped with quantity extension: the winning unit amount is
//! multiplied at full precision and rounded half-up to two digits only at
//! the boundary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use tally_core::quote::{extend_amount, format_money, validate_quantity};
use tally_core::resolve::{resolve, ResolutionContext, ResolveError};
use tally_core::types::{DbId, Timestamp};
use tally_db::repositories::PriceBookRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::PriceQuote;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /price/quote — quote a unit price for a product
// ---------------------------------------------------------------------------

/// Request body for a price quote. Field names are camelCase per the
/// published pricing contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub product_id: DbId,
    pub variant_id: Option<DbId>,
    pub price_book_id: Option<DbId>,
    pub unit_id: Option<DbId>,
    /// Must be strictly positive.
    pub quantity: Decimal,
    pub as_of: Option<Timestamp>,
    /// Shipping destination. Accepted so clients can already send it, but
    /// no region-scoped rules exist yet; it does not affect resolution.
    pub ship_to: Option<String>,
}

/// Quote the price of `quantity` units of a product for the caller.
///
/// An invalid quantity is a 400 and never reaches the resolver; an
/// unresolvable price is a typed 404, never a silent zero.
pub async fn quote_unit_price(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Json(body): Json<QuoteRequest>,
) -> AppResult<impl IntoResponse> {
    validate_quantity(body.quantity)?;
    let as_of = body.as_of.unwrap_or_else(chrono::Utc::now);

    let book = match body.price_book_id {
        Some(id) => PriceBookRepo::find_by_id(&state.pool, caller.org_id, id)
            .await?
            .ok_or(ResolveError::NoRuleSetFound)?,
        None => PriceBookRepo::find_active_default(&state.pool, caller.org_id)
            .await?
            .ok_or(ResolveError::NoActiveRuleSet)?,
    };

    let entries = PriceBookRepo::list_entries_for_key(
        &state.pool,
        book.id,
        body.product_id,
        body.variant_id,
        body.unit_id,
    )
    .await?;
    let candidates: Vec<_> = entries.iter().map(|e| e.to_candidate()).collect();

    let ctx = ResolutionContext {
        as_of,
        user_id: Some(caller.user_id),
        role: Some(caller.role.clone()),
    };

    let winner = resolve(&candidates, &ctx)?;
    let quoted = extend_amount(winner.amount, body.quantity);

    tracing::debug!(
        org_id = caller.org_id,
        price_book_id = book.id,
        entry_id = winner.id,
        product_id = body.product_id,
        ship_to = ?body.ship_to,
        "Price quoted",
    );

    Ok(Json(PriceQuote {
        ok: true,
        unit_price: format_money(quoted),
        currency: book.currency.clone(),
        unit_label: winner.unit_label.clone(),
        product_id: body.product_id,
    }))
}
