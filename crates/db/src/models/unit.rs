//! Unit-of-measure entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tally_core::types::{DbId, Timestamp};

/// A row from the `units` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Unit {
    pub id: DbId,
    pub org_id: DbId,
    pub code: String,
    pub label: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new unit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUnit {
    pub code: String,
    pub label: String,
}
