//! Cart line model and DTOs.

use restaurant_core::types::{DbId, Money};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `cart_lines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartLine {
    pub id: DbId,
    pub user_id: DbId,
    pub menuitem_id: DbId,
    pub quantity: i16,
    pub unit_price: Money,
    pub price: Money,
}

/// A fully priced cart line ready to insert.
///
/// Built by the API layer after looking up the catalog price; never
/// deserialized from a request.
#[derive(Debug, Clone)]
pub struct NewCartLine {
    pub user_id: DbId,
    pub menuitem_id: DbId,
    pub quantity: i16,
    pub unit_price: Money,
    pub price: Money,
}

/// Cart line joined with its menu item title, read at checkout.
#[derive(Debug, Clone, FromRow)]
pub struct CartSnapshotRow {
    pub id: DbId,
    pub menuitem_id: DbId,
    pub title: String,
    pub quantity: i16,
    pub unit_price: Money,
    pub price: Money,
}

impl From<CartSnapshotRow> for restaurant_core::checkout::CartEntry {
    fn from(row: CartSnapshotRow) -> Self {
        Self {
            cart_line_id: row.id,
            menuitem_id: row.menuitem_id,
            title: row.title,
            quantity: row.quantity,
            unit_price: row.unit_price,
            price: row.price,
        }
    }
}
