//! Handler for billing-rate resolution.
//!
//! Fetches the applicable rate card (explicit id or the tenant's active
//! default), lifts its entries into resolver candidates, and runs the
//! temporal-filter + specificity-ranking selection from `tally-core`. The
//! whole path is a read: one snapshot fetch, then a pure computation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tally_core::quote::format_money;
use tally_core::resolve::{resolve, ResolutionContext, ResolveError};
use tally_core::types::{DbId, Timestamp};
use tally_db::repositories::RateCardRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::ResolvedRate;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /rates/resolve — resolve the applicable billing rate
// ---------------------------------------------------------------------------

/// Request body for rate resolution.
///
/// Field names are camelCase per the published pricing contract. `userId`
/// and `role` let privileged callers resolve on behalf of another identity;
/// when omitted they default to the authenticated caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRateRequest {
    pub role: Option<String>,
    pub user_id: Option<DbId>,
    pub rate_card_id: Option<DbId>,
    pub as_of: Option<Timestamp>,
}

/// Resolve the single applicable rate-card entry for an identity at an
/// instant.
///
/// With an explicit `rateCardId`, a miss (including an id belonging to
/// another tenant) surfaces as a generic 404. Without one, the tenant's
/// active default card is selected, or 404 if none is configured.
pub async fn resolve_rate(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    Json(body): Json<ResolveRateRequest>,
) -> AppResult<impl IntoResponse> {
    let as_of = body.as_of.unwrap_or_else(chrono::Utc::now);

    let card = match body.rate_card_id {
        Some(id) => RateCardRepo::find_by_id(&state.pool, caller.org_id, id)
            .await?
            .ok_or(ResolveError::NoRuleSetFound)?,
        None => RateCardRepo::find_active_default(&state.pool, caller.org_id)
            .await?
            .ok_or(ResolveError::NoActiveRuleSet)?,
    };

    let entries = RateCardRepo::list_entries(&state.pool, card.id).await?;
    let candidates: Vec<_> = entries.iter().map(|e| e.to_candidate()).collect();

    let ctx = ResolutionContext {
        as_of,
        user_id: body.user_id.or(Some(caller.user_id)),
        role: body.role.or_else(|| Some(caller.role.clone())),
    };

    let winner = resolve(&candidates, &ctx)?;

    tracing::debug!(
        org_id = caller.org_id,
        rate_card_id = card.id,
        entry_id = winner.id,
        "Rate resolved",
    );

    Ok(Json(ResolvedRate {
        ok: true,
        rate_card_id: card.id,
        currency: card.currency.clone(),
        unit_id: winner.unit_id,
        unit_label: winner.unit_label.clone(),
        unit_price: format_money(winner.amount),
        product_id: winner.product_id,
    }))
}
