//! Route definitions for the `/menu-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::menu_items;
use crate::state::AppState;

/// Routes mounted at `/menu-items`.
///
/// ```text
/// GET    /        -> list_menu_items
/// POST   /        -> create_menu_item
/// GET    /{id}    -> get_menu_item
/// PUT    /{id}    -> replace_menu_item
/// PATCH  /{id}    -> update_menu_item
/// DELETE /{id}    -> delete_menu_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(menu_items::list_menu_items).post(menu_items::create_menu_item),
        )
        .route(
            "/{id}",
            get(menu_items::get_menu_item)
                .put(menu_items::replace_menu_item)
                .patch(menu_items::update_menu_item)
                .delete(menu_items::delete_menu_item),
        )
}
