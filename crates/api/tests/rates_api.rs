//! HTTP-level integration tests for billing-rate resolution.
//!
//! Covers specificity ranking, the active-default card lookup, temporal
//! windows, tenant isolation, and auth enforcement end to end.

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use common::{body_json, mint_token, post_json, post_json_auth, seed_org, Seed};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tally_db::models::rate_card::{CreateRateCard, CreateRateCardEntry, RateCard};
use tally_db::repositories::RateCardRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Create an active default rate card for the seeded org.
async fn create_default_card(pool: &PgPool, seed: &Seed) -> RateCard {
    RateCardRepo::create(
        pool,
        seed.org.id,
        &CreateRateCard {
            name: "Standard rates".into(),
            currency: Some("EUR".into()),
            is_active: Some(true),
            is_default: Some(true),
        },
    )
    .await
    .expect("rate card creation should succeed")
}

/// Add an entry to a card. `user_id`/`role` follow the scope columns.
async fn add_entry(
    pool: &PgPool,
    card_id: i64,
    unit_id: i64,
    user_id: Option<i64>,
    role: Option<&str>,
    amount: &str,
) {
    RateCardRepo::create_entry(
        pool,
        card_id,
        &CreateRateCardEntry {
            user_id,
            role: role.map(String::from),
            product_id: None,
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
// Specificity ranking
// ---------------------------------------------------------------------------

/// The rate scenario: user-scoped 50, role-scoped 40, unscoped 20 — the
/// requester matching all three gets the user-scoped 50.00.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_scoped_entry_wins_over_role_and_default(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let card = create_default_card(&pool, &seed).await;
    add_entry(&pool, card.id, seed.unit.id, None, None, "20.00").await;
    add_entry(&pool, card.id, seed.unit.id, None, Some("admin"), "40.00").await;
    add_entry(&pool, card.id, seed.unit.id, Some(seed.admin.id), None, "50.00").await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed.admin.id, seed.org.id, "admin");
    let response = post_json_auth(
        app,
        "/api/v1/rates/resolve",
        &token,
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["unitPrice"], "50.00");
    assert_eq!(json["rateCardId"], card.id);
    assert_eq!(json["currency"], "EUR");
    assert_eq!(json["unitLabel"], "Hour");
}

/// A user-scoped entry for somebody else is invisible; the role match wins.
#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_user_entry_does_not_mask_role_match(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let card = create_default_card(&pool, &seed).await;
    add_entry(&pool, card.id, seed.unit.id, Some(seed.member.id), None, "99.00").await;
    add_entry(&pool, card.id, seed.unit.id, None, Some("admin"), "40.00").await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed.admin.id, seed.org.id, "admin");
    let response = post_json_auth(
        app,
        "/api/v1/rates/resolve",
        &token,
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["unitPrice"], "40.00");
}

/// The body's `userId` / `role` override the caller's identity.
#[sqlx::test(migrations = "../db/migrations")]
async fn body_identity_overrides_caller(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let card = create_default_card(&pool, &seed).await;
    add_entry(&pool, card.id, seed.unit.id, None, None, "20.00").await;
    add_entry(&pool, card.id, seed.unit.id, Some(seed.member.id), None, "35.00").await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed.admin.id, seed.org.id, "admin");
    let response = post_json_auth(
        app,
        "/api/v1/rates/resolve",
        &token,
        serde_json::json!({ "userId": seed.member.id, "role": "member" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["unitPrice"], "35.00");
}

// ---------------------------------------------------------------------------
// Temporal windows
// ---------------------------------------------------------------------------

/// An entry valid [2024-01-01, 2024-06-01) is excluded at exactly
/// 2024-06-01 (half-open upper bound) and included the day before.
#[sqlx::test(migrations = "../db/migrations")]
async fn validity_upper_bound_is_exclusive(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    let card = create_default_card(&pool, &seed).await;
    RateCardRepo::create_entry(
        &pool,
        card.id,
        &CreateRateCardEntry {
            user_id: None,
            role: None,
            product_id: None,
            unit_id: seed.unit.id,
            amount: dec("25.00"),
            valid_from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            valid_to: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        },
    )
    .await
    .expect("entry creation should succeed");

    let token = mint_token(seed.admin.id, seed.org.id, "admin");

    // Exactly at the upper bound: the rule has lapsed.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/rates/resolve",
        &token,
        serde_json::json!({ "asOf": "2024-06-01T00:00:00Z" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_MATCHING_RATE");

    // One day earlier: still valid.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/rates/resolve",
        &token,
        serde_json::json!({ "asOf": "2024-05-31T00:00:00Z" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["unitPrice"], "25.00");
}

// ---------------------------------------------------------------------------
// Rule set selection
// ---------------------------------------------------------------------------

/// With no active default card, resolution is a typed 404 — never a zero.
#[sqlx::test(migrations = "../db/migrations")]
async fn missing_active_default_card_is_404(pool: PgPool) {
    let seed = seed_org(&pool, "acme").await;
    // A card exists but is not default.
    RateCardRepo::create(
        &pool,
        seed.org.id,
        &CreateRateCard {
            name: "Inactive".into(),
            currency: None,
            is_active: Some(true),
            is_default: Some(false),
        },
    )
    .await
    .expect("rate card creation should succeed");

    let app = common::build_test_app(pool);
    let token = mint_token(seed.admin.id, seed.org.id, "admin");
    let response = post_json_auth(
        app,
        "/api/v1/rates/resolve",
        &token,
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_ACTIVE_RULE_SET");
}

/// An explicitly requested card belonging to another tenant is a generic
/// 404 whose message does not echo the requested id.
#[sqlx::test(migrations = "../db/migrations")]
async fn cross_tenant_card_id_is_a_generic_404(pool: PgPool) {
    let seed_a = seed_org(&pool, "acme").await;
    let seed_b = seed_org(&pool, "globex").await;
    let foreign_card = create_default_card(&pool, &seed_b).await;
    add_entry(&pool, foreign_card.id, seed_b.unit.id, None, None, "20.00").await;

    let app = common::build_test_app(pool);
    let token = mint_token(seed_a.admin.id, seed_a.org.id, "admin");
    let response = post_json_auth(
        app,
        "/api/v1/rates/resolve",
        &token,
        serde_json::json!({ "rateCardId": foreign_card.id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    let message = json["error"].as_str().unwrap();
    assert!(
        !message.contains(&foreign_card.id.to_string()),
        "error message must not leak the requested id: {message}"
    );
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn resolve_without_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/rates/resolve", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
