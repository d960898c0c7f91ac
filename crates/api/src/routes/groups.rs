//! Route definitions for the staff rosters.

use axum::routing::get;
use axum::Router;

use crate::handlers::groups;
use crate::state::AppState;

/// Routes mounted at `/groups`.
///
/// ```text
/// GET    /manager/users          -> list_managers
/// POST   /manager/users          -> add_manager
/// DELETE /manager/users          -> remove_manager
/// GET    /delivery-crew/users    -> list_delivery_crew
/// POST   /delivery-crew/users    -> add_delivery_crew
/// DELETE /delivery-crew/users    -> remove_delivery_crew
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/manager/users",
            get(groups::list_managers)
                .post(groups::add_manager)
                .delete(groups::remove_manager),
        )
        .route(
            "/delivery-crew/users",
            get(groups::list_delivery_crew)
                .post(groups::add_delivery_crew)
                .delete(groups::remove_delivery_crew),
        )
}
