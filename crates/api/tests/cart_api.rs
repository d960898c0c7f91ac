//! HTTP-level integration tests for the caller's cart.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_category, create_menu_item, create_user, delete_auth, get, get_auth,
    post_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

const CART: &str = "/api/cart/menu-items";

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_uses_catalog_price(pool: PgPool) {
    let (user, token) = create_user(&pool, "cust", false).await;
    let category = create_category(&pool, "Main", "main").await;
    let burger = create_menu_item(&pool, "Burger", "5.00", category.id).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        CART,
        &token,
        // A client-supplied unit price is ignored.
        json!({ "menuitem": burger.id, "quantity": 2, "unit_price": "0.01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let line = body_json(response).await;
    assert_eq!(line["user_id"], user.id);
    assert_eq!(line["unit_price"], "5.00");
    assert_eq!(line["price"], "10.00");

    let lines = body_json(get_auth(app, CART, &token).await).await;
    assert_eq!(lines.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_add_conflicts(pool: PgPool) {
    let (_, token) = create_user(&pool, "cust", false).await;
    let category = create_category(&pool, "Main", "main").await;
    let burger = create_menu_item(&pool, "Burger", "5.00", category.id).await;
    let app = common::build_test_app(pool);
    let body = json!({ "menuitem_id": burger.id, "quantity": 1 });

    let first = post_json_auth(app.clone(), CART, &token, body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json_auth(app.clone(), CART, &token, body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    // The original line is unchanged.
    let lines = body_json(get_auth(app, CART, &token).await).await;
    assert_eq!(lines.as_array().unwrap().len(), 1);
    assert_eq!(lines[0]["quantity"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_duplicate_adds_keep_one_line(pool: PgPool) {
    let (_, token) = create_user(&pool, "cust", false).await;
    let category = create_category(&pool, "Main", "main").await;
    let burger = create_menu_item(&pool, "Burger", "5.00", category.id).await;
    let app = common::build_test_app(pool.clone());
    let body = json!({ "menuitem_id": burger.id, "quantity": 1 });

    let (first, second) = tokio::join!(
        post_json_auth(app.clone(), CART, &token, body.clone()),
        post_json_auth(app.clone(), CART, &token, body.clone()),
    );

    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    let lines: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cart_lines")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(lines.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_quantity_and_unknown_item(pool: PgPool) {
    let (_, token) = create_user(&pool, "cust", false).await;
    let category = create_category(&pool, "Main", "main").await;
    let burger = create_menu_item(&pool, "Burger", "5.00", category.id).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        CART,
        &token,
        json!({ "menuitem_id": burger.id, "quantity": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app.clone(),
        CART,
        &token,
        json!({ "menuitem_id": burger.id, "quantity": 40000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        CART,
        &token,
        json!({ "menuitem_id": 999_999, "quantity": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn line_price_must_fit_column(pool: PgPool) {
    let (_, token) = create_user(&pool, "cust", false).await;
    let category = create_category(&pool, "Main", "main").await;
    let caviar = create_menu_item(&pool, "Caviar", "9999.99", category.id).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        CART,
        &token,
        json!({ "menuitem_id": caviar.id, "quantity": 2 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn carts_are_private(pool: PgPool) {
    let (_, alice) = create_user(&pool, "alice", false).await;
    let (_, bob) = create_user(&pool, "bob", false).await;
    let category = create_category(&pool, "Main", "main").await;
    let burger = create_menu_item(&pool, "Burger", "5.00", category.id).await;
    let app = common::build_test_app(pool);

    post_json_auth(
        app.clone(),
        CART,
        &alice,
        json!({ "menuitem_id": burger.id, "quantity": 1 }),
    )
    .await;

    let lines = body_json(get_auth(app.clone(), CART, &bob).await).await;
    assert!(lines.as_array().unwrap().is_empty());

    // Bob clearing his cart does not touch Alice's.
    let response = delete_auth(app.clone(), CART, &bob).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let lines = body_json(get_auth(app, CART, &alice).await).await;
    assert_eq!(lines.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn clear_cart_is_idempotent(pool: PgPool) {
    let (_, token) = create_user(&pool, "cust", false).await;
    let category = create_category(&pool, "Main", "main").await;
    let burger = create_menu_item(&pool, "Burger", "5.00", category.id).await;
    let app = common::build_test_app(pool);

    post_json_auth(
        app.clone(),
        CART,
        &token,
        json!({ "menuitem_id": burger.id, "quantity": 3 }),
    )
    .await;

    for _ in 0..2 {
        let response = delete_auth(app.clone(), CART, &token).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
    let lines = body_json(get_auth(app, CART, &token).await).await;
    assert!(lines.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cart_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, CART).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
