//! Repository for the `rate_cards` and `rate_card_entries` tables.
//!
//! Every query that touches a rate card takes the calling tenant's `org_id`
//! explicitly and scopes on it in the WHERE clause. A card belonging to
//! another tenant is indistinguishable from one that does not exist.

use sqlx::PgPool;
use tally_core::types::DbId;

use crate::models::rate_card::{
    CreateRateCard, CreateRateCardEntry, RateCard, RateCardEntry,
};

const COLUMNS: &str = "id, org_id, name, currency, is_active, is_default, created_at, updated_at";

const ENTRY_COLUMNS: &str = "e.id, e.rate_card_id, e.user_id, \
     usr.display_name AS user_display_name, e.role, e.product_id, e.unit_id, \
     u.code AS unit_code, u.label AS unit_label, e.amount, \
     e.valid_from, e.valid_to, e.created_at, e.updated_at";

/// Provides read and write operations for rate cards and their entries.
pub struct RateCardRepo;

impl RateCardRepo {
    /// Insert a new rate card, returning the created row.
    pub async fn create(
        pool: &PgPool,
        org_id: DbId,
        input: &CreateRateCard,
    ) -> Result<RateCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO rate_cards (org_id, name, currency, is_active, is_default) \
             VALUES ($1, $2, COALESCE($3, 'EUR'), COALESCE($4, true), COALESCE($5, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RateCard>(&query)
            .bind(org_id)
            .bind(&input.name)
            .bind(&input.currency)
            .bind(input.is_active)
            .bind(input.is_default)
            .fetch_one(pool)
            .await
    }

    /// List all rate cards for a tenant, newest first.
    pub async fn list_for_org(pool: &PgPool, org_id: DbId) -> Result<Vec<RateCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rate_cards WHERE org_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, RateCard>(&query)
            .bind(org_id)
            .fetch_all(pool)
            .await
    }

    /// Find a rate card by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
    ) -> Result<Option<RateCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rate_cards WHERE org_id = $1 AND id = $2");
        sqlx::query_as::<_, RateCard>(&query)
            .bind(org_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the tenant's active default rate card.
    ///
    /// Write-time does not enforce a single default, so ties break to the
    /// most recently updated card. At most one row is returned.
    pub async fn find_active_default(
        pool: &PgPool,
        org_id: DbId,
    ) -> Result<Option<RateCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rate_cards \
             WHERE org_id = $1 AND is_active = true AND is_default = true \
             ORDER BY updated_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, RateCard>(&query)
            .bind(org_id)
            .fetch_optional(pool)
            .await
    }

    /// List a card's entries with unit and owning-user display data joined in.
    pub async fn list_entries(
        pool: &PgPool,
        rate_card_id: DbId,
    ) -> Result<Vec<RateCardEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} \
             FROM rate_card_entries e \
             JOIN units u ON u.id = e.unit_id \
             LEFT JOIN users usr ON usr.id = e.user_id \
             WHERE e.rate_card_id = $1 \
             ORDER BY e.id ASC"
        );
        sqlx::query_as::<_, RateCardEntry>(&query)
            .bind(rate_card_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new entry on a rate card, returning it with unit data joined.
    pub async fn create_entry(
        pool: &PgPool,
        rate_card_id: DbId,
        input: &CreateRateCardEntry,
    ) -> Result<RateCardEntry, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                 INSERT INTO rate_card_entries \
                     (rate_card_id, user_id, role, product_id, unit_id, amount, valid_from, valid_to) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 RETURNING * \
             ) \
             SELECT {ENTRY_COLUMNS} FROM inserted e \
             JOIN units u ON u.id = e.unit_id \
             LEFT JOIN users usr ON usr.id = e.user_id"
        );
        sqlx::query_as::<_, RateCardEntry>(&query)
            .bind(rate_card_id)
            .bind(input.user_id)
            .bind(&input.role)
            .bind(input.product_id)
            .bind(input.unit_id)
            .bind(input.amount)
            .bind(input.valid_from)
            .bind(input.valid_to)
            .fetch_one(pool)
            .await
    }
}
