//! Repository for the `users` table.

use sqlx::PgPool;
use tally_core::types::DbId;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, org_id, display_name, email, role, is_active, created_at, updated_at";

/// Provides write operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        org_id: DbId,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (org_id, display_name, email, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(org_id)
            .bind(&input.display_name)
            .bind(&input.email)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }
}
