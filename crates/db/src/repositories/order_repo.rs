//! Repository for the `orders` and `order_lines` tables.
//!
//! Checkout lives here because it must run in one transaction: read the
//! cart, write the order and its lines, and consume the cart rows.

use std::collections::HashMap;

use restaurant_core::access::OrderScope;
use restaurant_core::checkout::plan_checkout;
use restaurant_core::error::CoreError;
use restaurant_core::types::{Date, DbId};
use sqlx::PgPool;

use super::{clamp_limit, clamp_offset};
use crate::models::cart::CartSnapshotRow;
use crate::models::order::{
    CheckoutOutcome, Order, OrderLine, OrderListParams, OrderWithLines, UpdateOrder,
};

/// Column list for `orders` queries.
const ORDER_COLUMNS: &str = "id, user_id, delivery_crew_id, status, total, date";

/// Column list for `order_lines` queries.
const LINE_COLUMNS: &str = "id, order_id, menuitem_id, title, quantity, unit_price, price";

/// Failure modes of [`OrderRepo::place_order`].
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The cart snapshot failed a domain rule; nothing was written.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}

/// Provides checkout and order operations.
pub struct OrderRepo;

impl OrderRepo {
    /// Convert the cart of `user_id` into an order dated `date`.
    ///
    /// Runs in a single transaction. The user's row is locked first so two
    /// checkouts of the same user run one after the other; the second then
    /// finds the cart already consumed and returns
    /// [`CheckoutOutcome::EmptyCart`]. Only the cart rows read here are
    /// deleted, so a line added concurrently stays in the cart.
    pub async fn place_order(
        pool: &PgPool,
        user_id: DbId,
        date: Date,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, CartSnapshotRow>(
            "SELECT c.id, c.menuitem_id, m.title, c.quantity, c.unit_price, c.price
             FROM cart_lines c
             JOIN menu_items m ON m.id = c.menuitem_id
             WHERE c.user_id = $1
             ORDER BY c.id ASC
             FOR UPDATE OF c",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?;

        let Some(plan) = plan_checkout(rows.into_iter().map(Into::into).collect())? else {
            tx.rollback().await?;
            return Ok(CheckoutOutcome::EmptyCart);
        };

        let query = format!(
            "INSERT INTO orders (user_id, status, total, date)
             VALUES ($1, false, $2, $3)
             RETURNING {ORDER_COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .bind(plan.total)
            .bind(date)
            .fetch_one(&mut *tx)
            .await?;

        let line_query = format!(
            "INSERT INTO order_lines (order_id, menuitem_id, title, quantity, unit_price, price)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {LINE_COLUMNS}"
        );
        let mut order_lines = Vec::with_capacity(plan.lines.len());
        for line in &plan.lines {
            let row = sqlx::query_as::<_, OrderLine>(&line_query)
                .bind(order.id)
                .bind(line.menuitem_id)
                .bind(&line.title)
                .bind(line.quantity)
                .bind(line.unit_price)
                .bind(line.price)
                .fetch_one(&mut *tx)
                .await?;
            order_lines.push(row);
        }

        sqlx::query("DELETE FROM cart_lines WHERE id = ANY($1)")
            .bind(&plan.consumed_cart_line_ids[..])
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            order_id = order.id,
            user_id,
            lines = order_lines.len(),
            "Checkout committed"
        );

        Ok(CheckoutOutcome::Placed(OrderWithLines { order, order_lines }))
    }

    /// Find an order by ID (without lines).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an order by ID together with its lines.
    pub async fn find_with_lines(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OrderWithLines>, sqlx::Error> {
        let Some(order) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let order_lines = Self::lines_for_orders(pool, &[order.id]).await?;
        Ok(Some(OrderWithLines { order, order_lines }))
    }

    /// List the orders inside `scope`, newest first, each with its lines.
    pub async fn list(
        pool: &PgPool,
        scope: OrderScope,
        params: &OrderListParams,
    ) -> Result<Vec<OrderWithLines>, sqlx::Error> {
        let (owner, crew) = match scope {
            OrderScope::All => (None, None),
            OrderScope::OwnedBy(id) => (Some(id), None),
            OrderScope::AssignedTo(id) => (None, Some(id)),
        };

        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders
             WHERE ($1::BIGINT IS NULL OR user_id = $1)
               AND ($2::BIGINT IS NULL OR delivery_crew_id = $2)
               AND ($3::BOOLEAN IS NULL OR status = $3)
             ORDER BY id DESC
             LIMIT $4 OFFSET $5"
        );
        let orders = sqlx::query_as::<_, Order>(&query)
            .bind(owner)
            .bind(crew)
            .bind(params.status)
            .bind(clamp_limit(params.limit))
            .bind(clamp_offset(params.offset))
            .fetch_all(pool)
            .await?;

        // One query for all lines instead of one per order.
        let ids: Vec<DbId> = orders.iter().map(|o| o.id).collect();
        let lines = Self::lines_for_orders(pool, &ids).await?;

        let mut by_order: HashMap<DbId, Vec<OrderLine>> = HashMap::new();
        for line in lines {
            by_order.entry(line.order_id).or_default().push(line);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let order_lines = by_order.remove(&order.id).unwrap_or_default();
                OrderWithLines { order, order_lines }
            })
            .collect())
    }

    /// Fetch the lines of the given orders, ordered by line ID.
    pub async fn lines_for_orders(
        pool: &PgPool,
        order_ids: &[DbId],
    ) -> Result<Vec<OrderLine>, sqlx::Error> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {LINE_COLUMNS} FROM order_lines WHERE order_id = ANY($1) ORDER BY id ASC"
        );
        sqlx::query_as::<_, OrderLine>(&query)
            .bind(order_ids)
            .fetch_all(pool)
            .await
    }

    /// Update an order's status and/or delivery crew. The total never changes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrder,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET
                status = COALESCE($2, status),
                delivery_crew_id = CASE WHEN $3::BOOLEAN THEN $4::BIGINT ELSE delivery_crew_id END
             WHERE id = $1
             RETURNING {ORDER_COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(input.status)
            .bind(input.delivery_crew_id.is_some())
            .bind(input.delivery_crew_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Count orders owned by `user_id`.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
