//! Checkout planning: turning a cart snapshot into order lines and a total.
//!
//! The database layer reads the cart inside a transaction, hands the rows to
//! [`plan_checkout`], and persists the resulting plan. Keeping the arithmetic
//! here makes the snapshot rules testable without a database.

use rust_decimal::Decimal;

use crate::error::CoreError;
use crate::pricing::{self, MAX_ORDER_TOTAL};
use crate::types::{DbId, Money};

/// One cart line as read at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub cart_line_id: DbId,
    pub menuitem_id: DbId,
    pub title: String,
    pub quantity: i16,
    pub unit_price: Money,
    pub price: Money,
}

/// The order line to be written for one cart entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLine {
    pub menuitem_id: DbId,
    pub title: String,
    pub quantity: i16,
    pub unit_price: Money,
    pub price: Money,
}

/// Everything needed to persist an order.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutPlan {
    pub total: Money,
    pub lines: Vec<PlannedLine>,
    /// Cart rows consumed by this plan; exactly these are deleted.
    pub consumed_cart_line_ids: Vec<DbId>,
}

/// Sum of line prices.
pub fn order_total<'a, I>(prices: I) -> Money
where
    I: IntoIterator<Item = &'a Money>,
{
    prices.into_iter().fold(Decimal::ZERO, |acc, p| acc + p)
}

/// Plan a checkout from the cart entries read for one user.
///
/// Returns `Ok(None)` for an empty cart. Every entry's stored price must
/// equal `quantity x unit_price`; a mismatch means the row was written
/// outside the cart rules and aborts the checkout.
pub fn plan_checkout(entries: Vec<CartEntry>) -> Result<Option<CheckoutPlan>, CoreError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut lines = Vec::with_capacity(entries.len());
    let mut consumed_cart_line_ids = Vec::with_capacity(entries.len());

    for entry in entries {
        let expected = pricing::line_price(entry.quantity, entry.unit_price)?;
        if expected != entry.price {
            return Err(CoreError::Internal(format!(
                "Cart line {} has price {} but quantity x unit price is {expected}",
                entry.cart_line_id, entry.price
            )));
        }

        consumed_cart_line_ids.push(entry.cart_line_id);
        lines.push(PlannedLine {
            menuitem_id: entry.menuitem_id,
            title: entry.title,
            quantity: entry.quantity,
            unit_price: entry.unit_price,
            price: entry.price,
        });
    }

    let total = order_total(lines.iter().map(|l| &l.price));
    if total > MAX_ORDER_TOTAL {
        return Err(CoreError::Validation(format!(
            "Order total {total} exceeds the maximum of {MAX_ORDER_TOTAL}"
        )));
    }

    Ok(Some(CheckoutPlan {
        total,
        lines,
        consumed_cart_line_ids,
    }))
}
