//! Repository for the `cart_lines` table.

use restaurant_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart::{CartLine, NewCartLine};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, menuitem_id, quantity, unit_price, price";

/// Provides operations on a user's cart.
pub struct CartRepo;

impl CartRepo {
    /// List all cart lines owned by `user_id`, oldest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<CartLine>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cart_lines WHERE user_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, CartLine>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a priced cart line.
    ///
    /// A second line for the same (user, menu item) violates
    /// `uq_cart_lines_user_menuitem`; the error is returned untouched so the
    /// caller sees a conflict rather than a silent quantity change.
    pub async fn add(pool: &PgPool, input: &NewCartLine) -> Result<CartLine, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_lines (user_id, menuitem_id, quantity, unit_price, price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartLine>(&query)
            .bind(input.user_id)
            .bind(input.menuitem_id)
            .bind(input.quantity)
            .bind(input.unit_price)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Delete every cart line owned by `user_id`. Returns the number removed.
    pub async fn clear(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_lines WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
