//! Repository for the `price_books` and `price_book_entries` tables.
//!
//! Tenant scoping mirrors `RateCardRepo`: `org_id` is explicit on every
//! book-level query. Entry listing additionally narrows to the requested
//! resolution key (product, variant, unit).

use sqlx::PgPool;
use tally_core::types::DbId;

use crate::models::price_book::{
    CreatePriceBook, CreatePriceBookEntry, PriceBook, PriceBookEntry,
};

const COLUMNS: &str = "id, org_id, name, currency, is_active, is_default, created_at, updated_at";

const ENTRY_COLUMNS: &str = "e.id, e.price_book_id, e.product_id, e.variant_id, e.user_id, \
     usr.display_name AS user_display_name, e.role, \
     e.unit_id, u.code AS unit_code, u.label AS unit_label, e.amount, \
     e.valid_from, e.valid_to, e.created_at, e.updated_at";

/// Provides read and write operations for price books and their entries.
pub struct PriceBookRepo;

impl PriceBookRepo {
    /// Insert a new price book, returning the created row.
    pub async fn create(
        pool: &PgPool,
        org_id: DbId,
        input: &CreatePriceBook,
    ) -> Result<PriceBook, sqlx::Error> {
        let query = format!(
            "INSERT INTO price_books (org_id, name, currency, is_active, is_default) \
             VALUES ($1, $2, COALESCE($3, 'EUR'), COALESCE($4, true), COALESCE($5, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PriceBook>(&query)
            .bind(org_id)
            .bind(&input.name)
            .bind(&input.currency)
            .bind(input.is_active)
            .bind(input.is_default)
            .fetch_one(pool)
            .await
    }

    /// List all price books for a tenant, newest first.
    pub async fn list_for_org(pool: &PgPool, org_id: DbId) -> Result<Vec<PriceBook>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM price_books WHERE org_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, PriceBook>(&query)
            .bind(org_id)
            .fetch_all(pool)
            .await
    }

    /// Find a price book by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
    ) -> Result<Option<PriceBook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM price_books WHERE org_id = $1 AND id = $2");
        sqlx::query_as::<_, PriceBook>(&query)
            .bind(org_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the tenant's active default price book, tie-broken by most
    /// recent update. At most one row is returned.
    pub async fn find_active_default(
        pool: &PgPool,
        org_id: DbId,
    ) -> Result<Option<PriceBook>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM price_books \
             WHERE org_id = $1 AND is_active = true AND is_default = true \
             ORDER BY updated_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, PriceBook>(&query)
            .bind(org_id)
            .fetch_optional(pool)
            .await
    }

    /// List the entries matching a resolution key within one book.
    ///
    /// `variant_id` matches exactly (a variant-less request only sees
    /// variant-less entries); `unit_id` narrows only when the caller
    /// supplies one.
    pub async fn list_entries_for_key(
        pool: &PgPool,
        price_book_id: DbId,
        product_id: DbId,
        variant_id: Option<DbId>,
        unit_id: Option<DbId>,
    ) -> Result<Vec<PriceBookEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} \
             FROM price_book_entries e \
             JOIN units u ON u.id = e.unit_id \
             LEFT JOIN users usr ON usr.id = e.user_id \
             WHERE e.price_book_id = $1 \
               AND e.product_id = $2 \
               AND e.variant_id IS NOT DISTINCT FROM $3 \
               AND ($4::BIGINT IS NULL OR e.unit_id = $4) \
             ORDER BY e.id ASC"
        );
        sqlx::query_as::<_, PriceBookEntry>(&query)
            .bind(price_book_id)
            .bind(product_id)
            .bind(variant_id)
            .bind(unit_id)
            .fetch_all(pool)
            .await
    }

    /// List all entries of a book (administration surface).
    pub async fn list_entries(
        pool: &PgPool,
        price_book_id: DbId,
    ) -> Result<Vec<PriceBookEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} \
             FROM price_book_entries e \
             JOIN units u ON u.id = e.unit_id \
             LEFT JOIN users usr ON usr.id = e.user_id \
             WHERE e.price_book_id = $1 \
             ORDER BY e.id ASC"
        );
        sqlx::query_as::<_, PriceBookEntry>(&query)
            .bind(price_book_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new entry on a price book, returning it with unit data joined.
    pub async fn create_entry(
        pool: &PgPool,
        price_book_id: DbId,
        input: &CreatePriceBookEntry,
    ) -> Result<PriceBookEntry, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                 INSERT INTO price_book_entries \
                     (price_book_id, product_id, variant_id, user_id, role, unit_id, amount, valid_from, valid_to) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                 RETURNING * \
             ) \
             SELECT {ENTRY_COLUMNS} FROM inserted e \
             JOIN units u ON u.id = e.unit_id \
             LEFT JOIN users usr ON usr.id = e.user_id"
        );
        sqlx::query_as::<_, PriceBookEntry>(&query)
            .bind(price_book_id)
            .bind(input.product_id)
            .bind(input.variant_id)
            .bind(input.user_id)
            .bind(&input.role)
            .bind(input.unit_id)
            .bind(input.amount)
            .bind(input.valid_from)
            .bind(input.valid_to)
            .fetch_one(pool)
            .await
    }
}
