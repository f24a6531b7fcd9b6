//! Repository for the `orgs` table.
//!
//! Tenant provisioning happens out of band; this repo exists for setup
//! tooling and the integration-test harness.

use sqlx::PgPool;

use crate::models::org::Org;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides write operations for organizations.
pub struct OrgRepo;

impl OrgRepo {
    /// Insert a new organization, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Org, sqlx::Error> {
        let query = format!("INSERT INTO orgs (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Org>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
