//! Menu item entity model, DTOs and list parameters.

use restaurant_core::types::{DbId, Money};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `menu_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItem {
    pub id: DbId,
    pub title: String,
    pub price: Money,
    pub featured: bool,
    pub category_id: DbId,
}

/// DTO for creating a menu item, also the full body of a `PUT`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuItem {
    pub title: String,
    pub price: Money,
    #[serde(default)]
    pub featured: bool,
    #[serde(alias = "category")]
    pub category_id: DbId,
}

/// DTO for patching a menu item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMenuItem {
    pub title: Option<String>,
    pub price: Option<Money>,
    pub featured: Option<bool>,
    #[serde(alias = "category")]
    pub category_id: Option<DbId>,
}

impl From<CreateMenuItem> for UpdateMenuItem {
    fn from(input: CreateMenuItem) -> Self {
        Self {
            title: Some(input.title),
            price: Some(input.price),
            featured: Some(input.featured),
            category_id: Some(input.category_id),
        }
    }
}

/// Sort orders accepted by `GET /menu-items?ordering=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MenuItemOrdering {
    #[serde(rename = "price")]
    PriceAsc,
    #[serde(rename = "-price")]
    PriceDesc,
    #[serde(rename = "title")]
    TitleAsc,
    #[serde(rename = "-title")]
    TitleDesc,
}

impl MenuItemOrdering {
    /// The `ORDER BY` clause for this ordering. Ties break on id.
    pub fn sql(self) -> &'static str {
        match self {
            MenuItemOrdering::PriceAsc => "m.price ASC, m.id ASC",
            MenuItemOrdering::PriceDesc => "m.price DESC, m.id ASC",
            MenuItemOrdering::TitleAsc => "m.title ASC, m.id ASC",
            MenuItemOrdering::TitleDesc => "m.title DESC, m.id ASC",
        }
    }
}

/// Query parameters for `GET /api/menu-items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemListParams {
    /// Case-insensitive substring match on the category title.
    pub search: Option<String>,
    /// Exact category id.
    pub category: Option<DbId>,
    pub featured: Option<bool>,
    pub ordering: Option<MenuItemOrdering>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
