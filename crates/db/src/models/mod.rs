//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches

pub mod cart;
pub mod category;
pub mod group;
pub mod menu_item;
pub mod order;
pub mod user;
