//! Order and order line models.

use restaurant_core::types::{Date, DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
///
/// `status` is `false` while the order is unfulfilled.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub delivery_crew_id: Option<DbId>,
    pub status: bool,
    pub total: Money,
    pub date: Date,
}

/// A row from the `order_lines` table: an immutable snapshot of a cart line.
///
/// `menuitem_id` becomes `None` once the menu item is deleted; `title` and
/// `unit_price` still describe what was ordered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderLine {
    pub id: DbId,
    pub order_id: DbId,
    pub menuitem_id: Option<DbId>,
    pub title: String,
    pub quantity: i16,
    pub unit_price: Money,
    pub price: Money,
}

/// An order together with its lines, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithLines {
    #[serde(flatten)]
    pub order: Order,
    pub order_lines: Vec<OrderLine>,
}

/// Result of a checkout attempt.
#[derive(Debug, Clone)]
pub enum CheckoutOutcome {
    /// The cart was converted into this order and cleared.
    Placed(OrderWithLines),
    /// The cart had no lines; nothing was written.
    EmptyCart,
}

/// Fields an order update may change.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrder {
    pub status: Option<bool>,
    /// `Some(None)` unassigns the delivery crew.
    pub delivery_crew_id: Option<Option<DbId>>,
}

/// Query parameters for `GET /api/orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListParams {
    pub status: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
