//! Route definitions for the `/orders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /        -> list_orders
/// POST   /        -> place_order
/// GET    /{id}    -> get_order
/// PUT    /{id}    -> update_order
/// PATCH  /{id}    -> update_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders).post(orders::place_order))
        .route(
            "/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .patch(orders::update_order),
        )
}
