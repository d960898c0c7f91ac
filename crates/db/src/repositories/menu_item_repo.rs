//! Repository for the `menu_items` table.
//!
//! Listing supports the catalog filters: category title search, exact
//! category, featured flag, ordering and pagination.

use restaurant_core::types::DbId;
use sqlx::PgPool;

use super::{clamp_limit, clamp_offset};
use crate::models::menu_item::{CreateMenuItem, MenuItem, MenuItemListParams, UpdateMenuItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, price, featured, category_id";

/// Same columns qualified with the `m` alias used by the list query.
const QUALIFIED_COLUMNS: &str = "m.id, m.title, m.price, m.featured, m.category_id";

/// Ordering used when the caller does not ask for one.
const DEFAULT_ORDER: &str = "m.id ASC";

/// Provides CRUD operations for menu items.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// Insert a new menu item, returning the created row.
    ///
    /// `input.price` must already be normalized to two decimal places.
    pub async fn create(pool: &PgPool, input: &CreateMenuItem) -> Result<MenuItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items (title, price, featured, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(&input.title)
            .bind(input.price)
            .bind(input.featured)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Find a menu item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items WHERE id = $1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List menu items matching `params`.
    pub async fn list(
        pool: &PgPool,
        params: &MenuItemListParams,
    ) -> Result<Vec<MenuItem>, sqlx::Error> {
        let order = params
            .ordering
            .map(|o| o.sql())
            .unwrap_or(DEFAULT_ORDER);
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}
             FROM menu_items m
             JOIN categories c ON c.id = m.category_id
             WHERE ($1::TEXT IS NULL OR c.title ILIKE $1)
               AND ($2::BIGINT IS NULL OR m.category_id = $2)
               AND ($3::BOOLEAN IS NULL OR m.featured = $3)
             ORDER BY {order}
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(search)
            .bind(params.category)
            .bind(params.featured)
            .bind(clamp_limit(params.limit))
            .bind(clamp_offset(params.offset))
            .fetch_all(pool)
            .await
    }

    /// Update a menu item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMenuItem,
    ) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_items SET
                title = COALESCE($2, title),
                price = COALESCE($3, price),
                featured = COALESCE($4, featured),
                category_id = COALESCE($5, category_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.price)
            .bind(input.featured)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a menu item. Returns `true` if a row was removed.
    ///
    /// Cart lines for the item are removed with it; order lines keep their
    /// snapshot and lose only the reference.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
