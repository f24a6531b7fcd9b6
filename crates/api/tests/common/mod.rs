//! Shared harness for HTTP integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) on top
//! of the per-test database that `#[sqlx::test]` provides, plus JSON request
//! helpers and seed data builders.

#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tally_api::auth::jwt::{generate_access_token, JwtConfig};
use tally_api::config::ServerConfig;
use tally_api::router::build_app_router;
use tally_api::state::AppState;
use tally_core::roles::{ROLE_ADMIN, ROLE_MEMBER};
use tally_db::models::org::Org;
use tally_db::models::product::{CreateProduct, Product};
use tally_db::models::unit::{CreateUnit, Unit};
use tally_db::models::user::{CreateUser, User};
use tally_db::repositories::{OrgRepo, ProductRepo, UnitRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through `build_app_router` so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint an access token for the given identity, signed with the test secret.
pub fn mint_token(user_id: i64, org_id: i64, role: &str) -> String {
    generate_access_token(user_id, org_id, role, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// A seeded tenant with an admin, a member, a unit, and a product.
pub struct Seed {
    pub org: Org,
    pub admin: User,
    pub member: User,
    pub unit: Unit,
    pub product: Product,
}

/// Create a tenant with the reference data most tests need.
pub async fn seed_org(pool: &PgPool, name: &str) -> Seed {
    let org = OrgRepo::create(pool, name)
        .await
        .expect("org creation should succeed");

    let admin = UserRepo::create(
        pool,
        org.id,
        &CreateUser {
            display_name: "Admin".into(),
            email: format!("admin@{name}.test"),
            role: ROLE_ADMIN.into(),
        },
    )
    .await
    .expect("admin creation should succeed");

    let member = UserRepo::create(
        pool,
        org.id,
        &CreateUser {
            display_name: "Member".into(),
            email: format!("member@{name}.test"),
            role: ROLE_MEMBER.into(),
        },
    )
    .await
    .expect("member creation should succeed");

    let unit = UnitRepo::create(
        pool,
        org.id,
        &CreateUnit {
            code: "hour".into(),
            label: "Hour".into(),
        },
    )
    .await
    .expect("unit creation should succeed");

    let product = ProductRepo::create(
        pool,
        org.id,
        &CreateProduct {
            sku: "SKU-001".into(),
            name: "Consulting".into(),
        },
    )
    .await
    .expect("product creation should succeed");

    Seed {
        org,
        admin,
        member,
        unit,
        product,
    }
}
