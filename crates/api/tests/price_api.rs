//! HTTP-level integration tests for catalog price quoting.

mod common;

use axum::http::StatusCode;
use common::{body_json, mint_token, post_json_auth, seed_org, Seed};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tally_db::models::price_book::{CreatePriceBook, CreatePriceBookEntry, PriceBook};
use tally_db::models::product::CreateProductVariant;
use tally_db::repositories::{PriceBookRepo, ProductRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Create an active default price book for the seeded org.
async fn create_default_book(pool: &PgPool, seed: &Seed) -> PriceBook {
    PriceBookRepo::create(
        pool,
        seed.org.id,
        &CreatePriceBook {
            name: "List prices".into(),
            currency: Some("USD".into()),
            is_active: Some(true),
            is_default: Some(true),
        },
    )
    .await
    .expect("price book creation should succeed")
}

/// Add an unscoped entry for a product to a book.
async fn add_entry(
    pool: &PgPool,
    book_id: i64,
    product_id: i64,
    variant_id: Option<i64>,
    unit_id: i64,
    amount: &str,
) {
    PriceBookRepo::create_entry(
        pool,
        book_id,
        &CreatePriceBookEntry {
            product_id,
            variant_id,
            user_id: None,
            role: None,
            unit_id,
            amount: dec(amount),
            valid_from: None,
            valid_to: None,
        },
    )
    .await
    .expect("entry creation should succeed");
}

// ---------------------------------------------------------------------------
// Quoting
// ---------------------------------------------------------------------------

/// The quote scenario: unscoped 10.00/unit, quantity 3 → "30.00".
#[sqlx::test(migrations = "../db/migrations")]
async fn quantity_extends_the_unit_amount(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let book = create_default_book(&pool, &seed).await;
    add_entry(&pool, book.id, seed.product.id, None, seed.unit.id, "10.00").await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed.member.id, seed.org.id, "member");
    let response = post_json_auth(
        app,
        "/api/v1/price/quote",
        &token,
        serde_json::json!({ "productId": seed.product.id, "quantity": 3 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["unitPrice"], "30.00");
    assert_eq!(json["currency"], "USD");
    assert_eq!(json["unitLabel"], "Hour");
    assert_eq!(json["productId"], seed.product.id);
}

/// Fractional quantities multiply at full precision before the final
/// half-up rounding.
#[sqlx::test(migrations = "../db/migrations")]
async fn rounding_happens_once_at_the_boundary(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let book = create_default_book(&pool, &seed).await;
    // 0.335 * 3 = 1.005, which rounds half-up to 1.01. Rounding the unit
    // amount first would give 0.34 * 3 = 1.02.
    add_entry(&pool, book.id, seed.product.id, None, seed.unit.id, "0.335").await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed.member.id, seed.org.id, "member");
    let response = post_json_auth(
        app,
        "/api/v1/price/quote",
        &token,
        serde_json::json!({ "productId": seed.product.id, "quantity": 3 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["unitPrice"], "1.01");
}

/// A variant-keyed request only sees entries for that exact variant.
#[sqlx::test(migrations = "../db/migrations")]
async fn variant_pricing_matches_exactly(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let book = create_default_book(&pool, &seed).await;
    let variant = ProductRepo::create_variant(
        &pool,
        seed.product.id,
        &CreateProductVariant { name: "Pro".into() },
    )
    .await
    .expect("variant creation should succeed");

    add_entry(&pool, book.id, seed.product.id, None, seed.unit.id, "10.00").await;
    add_entry(&pool, book.id, seed.product.id, Some(variant.id), seed.unit.id, "15.00").await;

    let token = mint_token(seed.member.id, seed.org.id, "member");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/price/quote",
        &token,
        serde_json::json!({ "productId": seed.product.id, "variantId": variant.id, "quantity": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["unitPrice"], "15.00");

    // Without a variant, only the variant-less entry applies.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/price/quote",
        &token,
        serde_json::json!({ "productId": seed.product.id, "quantity": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["unitPrice"], "10.00");
}

/// User-scoped price book entries beat the unscoped list price.
#[sqlx::test(migrations = "../db/migrations")]
async fn negotiated_user_price_wins(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let book = create_default_book(&pool, &seed).await;
    add_entry(&pool, book.id, seed.product.id, None, seed.unit.id, "10.00").await;
    PriceBookRepo::create_entry(
        &pool,
        book.id,
        &CreatePriceBookEntry {
            product_id: seed.product.id,
            variant_id: None,
            user_id: Some(seed.member.id),
            role: None,
            unit_id: seed.unit.id,
            amount: dec("8.00"),
            valid_from: None,
            valid_to: None,
        },
    )
    .await
    .expect("entry creation should succeed");

    let app = common::build_test_app(pool);
    let token = mint_token(seed.member.id, seed.org.id, "member");
    let response = post_json_auth(
        app,
        "/api/v1/price/quote",
        &token,
        serde_json::json!({ "productId": seed.product.id, "quantity": 2 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["unitPrice"], "16.00");
}

// ---------------------------------------------------------------------------
// Validation and unresolvable outcomes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn non_positive_quantity_is_400(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let book = create_default_book(&pool, &seed).await;
    add_entry(&pool, book.id, seed.product.id, None, seed.unit.id, "10.00").await;

    let token = mint_token(seed.member.id, seed.org.id, "member");

    for quantity in [0, -3] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/price/quote",
            &token,
            serde_json::json!({ "productId": seed.product.id, "quantity": quantity }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

/// A product with no entries in the book quotes nothing — typed 404,
/// never a zero amount.
#[sqlx::test(migrations = "../db/migrations")]
async fn unpriced_product_is_404(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    create_default_book(&pool, &seed).await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed.member.id, seed.org.id, "member");
    let response = post_json_auth(
        app,
        "/api/v1/price/quote",
        &token,
        serde_json::json!({ "productId": seed.product.id, "quantity": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_MATCHING_RATE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_default_book_is_404(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed.member.id, seed.org.id, "member");
    let response = post_json_auth(
        app,
        "/api/v1/price/quote",
        &token,
        serde_json::json!({ "productId": seed.product.id, "quantity": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_ACTIVE_RULE_SET");
}
