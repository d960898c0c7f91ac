//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cart_repo;
pub mod category_repo;
pub mod group_repo;
pub mod menu_item_repo;
pub mod order_repo;
pub mod user_repo;

pub use cart_repo::CartRepo;
pub use category_repo::CategoryRepo;
pub use group_repo::GroupRepo;
pub use menu_item_repo::MenuItemRepo;
pub use order_repo::{CheckoutError, OrderRepo};
pub use user_repo::UserRepo;

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 100;

/// Maximum page size for list endpoints.
pub const MAX_LIMIT: i64 = 500;

/// Clamp a caller-supplied page size into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
