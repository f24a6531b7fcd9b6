//! Price book entity models and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tally_core::resolve::RuleCandidate;
use tally_core::scope::Scope;
use tally_core::types::{DbId, Timestamp};

/// A row from the `price_books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PriceBook {
    pub id: DbId,
    pub org_id: DbId,
    pub name: String,
    pub currency: String,
    pub is_active: bool,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new price book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePriceBook {
    pub name: String,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
}

/// A `price_book_entries` row joined with its unit's display data and, for
/// user-scoped entries, the owning user's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PriceBookEntry {
    pub id: DbId,
    pub price_book_id: DbId,
    pub product_id: DbId,
    pub variant_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub user_display_name: Option<String>,
    pub role: Option<String>,
    pub unit_id: DbId,
    pub unit_code: String,
    pub unit_label: String,
    pub amount: Decimal,
    pub valid_from: Option<Timestamp>,
    pub valid_to: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PriceBookEntry {
    /// Lift this row into the resolver's candidate type.
    pub fn to_candidate(&self) -> RuleCandidate {
        RuleCandidate {
            id: self.id,
            scope: Scope::from_columns(self.user_id, self.role.clone()),
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            amount: self.amount,
            unit_id: self.unit_id,
            unit_label: self.unit_label.clone(),
            product_id: Some(self.product_id),
            updated_at: self.updated_at,
        }
    }
}

/// DTO for adding an entry to a price book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePriceBookEntry {
    pub product_id: DbId,
    pub variant_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub role: Option<String>,
    pub unit_id: DbId,
    pub amount: Decimal,
    pub valid_from: Option<Timestamp>,
    pub valid_to: Option<Timestamp>,
}
