//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers authorize through the extractors in [`crate::middleware`],
//! delegate to the repositories in `restaurant_db` and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod cart;
pub mod categories;
pub mod groups;
pub mod menu_items;
pub mod orders;
