//! Organization (tenant) entity model.

use serde::Serialize;
use sqlx::FromRow;
use tally_core::types::{DbId, Timestamp};

/// A row from the `orgs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Org {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
