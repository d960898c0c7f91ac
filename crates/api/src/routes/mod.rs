pub mod auth;
pub mod cart;
pub mod categories;
pub mod groups;
pub mod health;
pub mod menu_items;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                      list (public), create (manager)
/// /categories/{id}                 get (public), put, patch, delete (manager)
///
/// /menu-items                      list (public), create (manager)
/// /menu-items/{id}                 get (public), put, patch, delete (manager)
///
/// /cart/menu-items                 list, add, clear (caller's own cart)
///
/// /orders                          list (scoped by role), place (checkout)
/// /orders/{id}                     get (scoped), put, patch (staff)
///
/// /groups/manager/users            list, add, remove (super-admin)
/// /groups/delivery-crew/users      list (any), add, remove (manager)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/menu-items", menu_items::router())
        .nest("/cart", cart::router())
        .nest("/orders", orders::router())
        .nest("/groups", groups::router())
}
