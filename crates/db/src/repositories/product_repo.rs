//! Repository for the `products` and `product_variants` tables.

use sqlx::PgPool;
use tally_core::types::DbId;

use crate::models::product::{CreateProduct, CreateProductVariant, Product, ProductVariant};

const COLUMNS: &str = "id, org_id, sku, name, is_active, created_at, updated_at";

const VARIANT_COLUMNS: &str = "id, product_id, name, created_at, updated_at";

/// Provides CRUD operations for products and their variants.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(
        pool: &PgPool,
        org_id: DbId,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (org_id, sku, name) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(org_id)
            .bind(&input.sku)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List active products for a tenant, by SKU.
    pub async fn list_for_org(pool: &PgPool, org_id: DbId) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE org_id = $1 AND is_active = true ORDER BY sku ASC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(org_id)
            .fetch_all(pool)
            .await
    }

    /// Find a product by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        org_id: DbId,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE org_id = $1 AND id = $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(org_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new variant for a product, returning the created row.
    pub async fn create_variant(
        pool: &PgPool,
        product_id: DbId,
        input: &CreateProductVariant,
    ) -> Result<ProductVariant, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_variants (product_id, name) VALUES ($1, $2) \
             RETURNING {VARIANT_COLUMNS}"
        );
        sqlx::query_as::<_, ProductVariant>(&query)
            .bind(product_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List a product's variants.
    pub async fn list_variants(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductVariant>, sqlx::Error> {
        let query = format!(
            "SELECT {VARIANT_COLUMNS} FROM product_variants WHERE product_id = $1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, ProductVariant>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
