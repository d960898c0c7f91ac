//! Checkout transaction tests against a real database.

use std::str::FromStr;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use restaurant_core::access::OrderScope;
use restaurant_core::types::{DbId, Money};
use restaurant_db::models::cart::NewCartLine;
use restaurant_db::models::category::CreateCategory;
use restaurant_db::models::menu_item::{CreateMenuItem, MenuItem};
use restaurant_db::models::order::{CheckoutOutcome, OrderListParams, UpdateOrder};
use restaurant_db::models::user::CreateUser;
use restaurant_db::repositories::{
    CartRepo, CategoryRepo, MenuItemRepo, OrderRepo, UserRepo,
};
use sqlx::PgPool;

fn money(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

async fn user(pool: &PgPool, username: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "not-a-real-hash".to_string(),
            is_superuser: false,
        },
    )
    .await
    .unwrap()
    .id
}

async fn item(pool: &PgPool, title: &str, price: &str) -> MenuItem {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            title: format!("{title} category"),
            slug: title.to_lowercase(),
        },
    )
    .await
    .unwrap();
    MenuItemRepo::create(
        pool,
        &CreateMenuItem {
            title: title.to_string(),
            price: money(price),
            featured: false,
            category_id: category.id,
        },
    )
    .await
    .unwrap()
}

async fn add(pool: &PgPool, user_id: DbId, item: &MenuItem, quantity: i16) {
    let price = restaurant_core::pricing::line_price(quantity, item.price).unwrap();
    CartRepo::add(
        pool,
        &NewCartLine {
            user_id,
            menuitem_id: item.id,
            quantity,
            unit_price: item.price,
            price,
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkout_moves_cart_into_order(pool: PgPool) {
    let customer = user(&pool, "cust").await;
    let burger = item(&pool, "Burger", "5.00").await;
    let fries = item(&pool, "Fries", "3.00").await;
    add(&pool, customer, &burger, 2).await;
    add(&pool, customer, &fries, 1).await;

    let outcome = OrderRepo::place_order(&pool, customer, today()).await.unwrap();
    let placed = assert_matches!(outcome, CheckoutOutcome::Placed(o) => o);

    assert_eq!(placed.order.total, money("13.00"));
    assert_eq!(placed.order.date, today());
    assert!(!placed.order.status);
    assert_eq!(placed.order_lines.len(), 2);
    let line_sum: Money = placed.order_lines.iter().map(|l| l.price).sum();
    assert_eq!(line_sum, placed.order.total);

    assert!(CartRepo::list_for_user(&pool, customer).await.unwrap().is_empty());

    let reloaded = OrderRepo::find_with_lines(&pool, placed.order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.order_lines.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_cart_returns_tagged_outcome(pool: PgPool) {
    let customer = user(&pool, "cust").await;

    let outcome = OrderRepo::place_order(&pool, customer, today()).await.unwrap();

    assert_matches!(outcome, CheckoutOutcome::EmptyCart);
    assert_eq!(OrderRepo::count_for_user(&pool, customer).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkout_leaves_other_carts_alone(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let burger = item(&pool, "Burger", "5.00").await;
    add(&pool, alice, &burger, 1).await;
    add(&pool, bob, &burger, 4).await;

    OrderRepo::place_order(&pool, alice, today()).await.unwrap();

    let bob_cart = CartRepo::list_for_user(&pool, bob).await.unwrap();
    assert_eq!(bob_cart.len(), 1);
    assert_eq!(bob_cart[0].quantity, 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_respects_scope(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let bob = user(&pool, "bob").await;
    let crew = user(&pool, "rider").await;
    let burger = item(&pool, "Burger", "5.00").await;

    add(&pool, alice, &burger, 1).await;
    let CheckoutOutcome::Placed(alice_order) =
        OrderRepo::place_order(&pool, alice, today()).await.unwrap()
    else {
        panic!("expected an order");
    };
    add(&pool, bob, &burger, 1).await;
    OrderRepo::place_order(&pool, bob, today()).await.unwrap();

    OrderRepo::update(
        &pool,
        alice_order.order.id,
        &UpdateOrder {
            status: None,
            delivery_crew_id: Some(Some(crew)),
        },
    )
    .await
    .unwrap()
    .unwrap();

    let params = OrderListParams::default();
    let all = OrderRepo::list(&pool, OrderScope::All, &params).await.unwrap();
    assert_eq!(all.len(), 2);

    let own = OrderRepo::list(&pool, OrderScope::OwnedBy(bob), &params).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].order.user_id, bob);
    assert_eq!(own[0].order_lines.len(), 1);

    let assigned = OrderRepo::list(&pool, OrderScope::AssignedTo(crew), &params)
        .await
        .unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].order.id, alice_order.order.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_leaves_unmentioned_fields(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let crew = user(&pool, "rider").await;
    let burger = item(&pool, "Burger", "5.00").await;
    add(&pool, alice, &burger, 1).await;
    let CheckoutOutcome::Placed(placed) =
        OrderRepo::place_order(&pool, alice, today()).await.unwrap()
    else {
        panic!("expected an order");
    };
    let id = placed.order.id;

    let assigned = OrderRepo::update(
        &pool,
        id,
        &UpdateOrder {
            status: None,
            delivery_crew_id: Some(Some(crew)),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(assigned.delivery_crew_id, Some(crew));

    let delivered = OrderRepo::update(
        &pool,
        id,
        &UpdateOrder {
            status: Some(true),
            delivery_crew_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(delivered.status);
    assert_eq!(delivered.delivery_crew_id, Some(crew));
    assert_eq!(delivered.total, money("5.00"));

    let unassigned = OrderRepo::update(
        &pool,
        id,
        &UpdateOrder {
            status: None,
            delivery_crew_id: Some(None),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(unassigned.delivery_crew_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_crew_member_unassigns_orders(pool: PgPool) {
    let alice = user(&pool, "alice").await;
    let crew = user(&pool, "rider").await;
    let burger = item(&pool, "Burger", "5.00").await;
    add(&pool, alice, &burger, 1).await;
    let CheckoutOutcome::Placed(placed) =
        OrderRepo::place_order(&pool, alice, today()).await.unwrap()
    else {
        panic!("expected an order");
    };
    OrderRepo::update(
        &pool,
        placed.order.id,
        &UpdateOrder {
            status: None,
            delivery_crew_id: Some(Some(crew)),
        },
    )
    .await
    .unwrap();

    assert!(UserRepo::delete(&pool, crew).await.unwrap());

    let order = OrderRepo::find_by_id(&pool, placed.order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.delivery_crew_id, None);

    // Deleting the owner removes the order with it.
    assert!(UserRepo::delete(&pool, alice).await.unwrap());
    assert!(OrderRepo::find_by_id(&pool, placed.order.id)
        .await
        .unwrap()
        .is_none());
}
