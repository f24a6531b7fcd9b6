//! Shared response types for API handlers.
//!
//! The administration surface wraps payloads in a `{ "data": ... }`
//! envelope via [`DataResponse`]. The two resolution endpoints use the flat
//! camelCase shapes of the published pricing contract instead
//! ([`ResolvedRate`], [`PriceQuote`]) -- those field names are part of the
//! wire format consumed by external clients and are not negotiable here.

use serde::Serialize;
use tally_core::types::DbId;

/// Standard `{ "data": T }` response envelope.
///
/// Wraps any serializable payload in the project's standard response format.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Response body of `POST /rates/resolve`.
///
/// `unit_price` is a decimal string with exactly two fractional digits --
/// never a binary float -- so no precision is lost across the boundary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRate {
    pub ok: bool,
    pub rate_card_id: DbId,
    pub currency: String,
    pub unit_id: DbId,
    pub unit_label: String,
    pub unit_price: String,
    pub product_id: Option<DbId>,
}

/// Response body of `POST /price/quote`.
///
/// `unit_price` carries the quantity-extended amount, rounded half-up to
/// two fractional digits, serialized as a decimal string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub ok: bool,
    pub unit_price: String,
    pub currency: String,
    pub unit_label: String,
    pub product_id: DbId,
}
