#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use restaurant_api::auth::jwt::{generate_access_token, JwtConfig};
use restaurant_api::auth::password::hash_password;
use restaurant_api::config::ServerConfig;
use restaurant_api::router::build_app_router;
use restaurant_api::state::AppState;
use restaurant_core::roles::StaffGroup;
use restaurant_core::types::{DbId, Money};
use restaurant_db::models::category::{Category, CreateCategory};
use restaurant_db::models::menu_item::{CreateMenuItem, MenuItem};
use restaurant_db::models::user::{CreateUser, User};
use restaurant_db::repositories::{CategoryRepo, GroupRepo, MenuItemRepo, UserRepo};
use sqlx::PgPool;
use tower::ServiceExt;

/// Password given to every fixture user.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        admin: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send a request with an optional bearer token and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn delete_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user directly and return it with a valid bearer token.
pub async fn create_user(pool: &PgPool, username: &str, is_superuser: bool) -> (User, String) {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        is_superuser,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let token = token_for(user.id);
    (user, token)
}

/// Insert a user and make them a member of `group`.
pub async fn create_staff(pool: &PgPool, username: &str, group: StaffGroup) -> (User, String) {
    let (user, token) = create_user(pool, username, false).await;
    GroupRepo::add_member(pool, group, user.id)
        .await
        .expect("group membership should succeed");
    (user, token)
}

pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

pub fn money(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

pub async fn create_category(pool: &PgPool, title: &str, slug: &str) -> Category {
    CategoryRepo::create(
        pool,
        &CreateCategory {
            title: title.to_string(),
            slug: slug.to_string(),
        },
    )
    .await
    .expect("category creation should succeed")
}

pub async fn create_menu_item(
    pool: &PgPool,
    title: &str,
    price: &str,
    category_id: DbId,
) -> MenuItem {
    MenuItemRepo::create(
        pool,
        &CreateMenuItem {
            title: title.to_string(),
            price: money(price),
            featured: false,
            category_id,
        },
    )
    .await
    .expect("menu item creation should succeed")
}
