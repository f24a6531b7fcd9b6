//! Repository for the `units` table.

use sqlx::PgPool;
use tally_core::types::DbId;

use crate::models::unit::{CreateUnit, Unit};

const COLUMNS: &str = "id, org_id, code, label, created_at, updated_at";

/// Provides CRUD operations for units of measure.
pub struct UnitRepo;

impl UnitRepo {
    /// Insert a new unit, returning the created row.
    pub async fn create(
        pool: &PgPool,
        org_id: DbId,
        input: &CreateUnit,
    ) -> Result<Unit, sqlx::Error> {
        let query = format!(
            "INSERT INTO units (org_id, code, label) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(org_id)
            .bind(&input.code)
            .bind(&input.label)
            .fetch_one(pool)
            .await
    }

    /// List all units for a tenant, by code.
    pub async fn list_for_org(pool: &PgPool, org_id: DbId) -> Result<Vec<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE org_id = $1 ORDER BY code ASC");
        sqlx::query_as::<_, Unit>(&query)
            .bind(org_id)
            .fetch_all(pool)
            .await
    }
}
