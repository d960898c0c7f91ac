//! Handlers for the `/orders` resource.
//!
//! Visibility follows the caller's role: managers and super-admins see every
//! order, delivery crew see the orders assigned to them, customers see their
//! own. Orders outside the caller's scope are reported as not found.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use restaurant_core::access::{authorize_order_update, order_scope, OrderChange};
use restaurant_core::error::CoreError;
use restaurant_core::roles::StaffGroup;
use restaurant_core::types::DbId;
use restaurant_db::models::order::{
    CheckoutOutcome, OrderListParams, OrderWithLines, UpdateOrder,
};
use restaurant_db::repositories::{GroupRepo, OrderRepo};
use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT`/`PATCH /api/orders/{id}`.
///
/// `delivery_crew_id` distinguishes absent (leave as is) from `null`
/// (unassign).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: Option<bool>,
    #[serde(default, alias = "delivery_crew", deserialize_with = "present")]
    pub delivery_crew_id: Option<Option<DbId>>,
}

/// Wraps a present field (including `null`) in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Order", id })
}

/// GET /api/orders
///
/// Newest first, each with its lines. Supports `status`, `limit`, `offset`.
pub async fn list_orders(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<OrderListParams>,
) -> AppResult<Json<Vec<OrderWithLines>>> {
    let scope = order_scope(auth.role, auth.user_id);
    let orders = OrderRepo::list(&state.pool, scope, &params).await?;
    Ok(Json(orders))
}

/// POST /api/orders
///
/// Convert the caller's cart into an order. An empty cart is rejected with
/// `EMPTY_CART` and nothing is written.
pub async fn place_order(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();

    match OrderRepo::place_order(&state.pool, auth.user_id, today).await? {
        CheckoutOutcome::Placed(order) => {
            tracing::info!(
                order_id = order.order.id,
                user_id = auth.user_id,
                total = %order.order.total,
                "Order placed"
            );
            Ok((StatusCode::CREATED, Json(order)))
        }
        CheckoutOutcome::EmptyCart => Err(AppError::Core(CoreError::EmptyCart)),
    }
}

/// GET /api/orders/{id}
pub async fn get_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrderWithLines>> {
    let scope = order_scope(auth.role, auth.user_id);

    let order = OrderRepo::find_with_lines(&state.pool, id)
        .await?
        .filter(|o| scope.contains(o.order.user_id, o.order.delivery_crew_id))
        .ok_or_else(|| not_found(id))?;

    Ok(Json(order))
}

/// PUT/PATCH /api/orders/{id}
///
/// Managers and super-admins may set `status` and `delivery_crew_id`.
/// Delivery crew may set `status` on orders assigned to them. Customers are
/// refused. A new delivery crew must belong to the Delivery Crew group.
pub async fn update_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateOrderRequest>,
) -> AppResult<Json<OrderWithLines>> {
    let change = OrderChange {
        sets_status: input.status.is_some(),
        sets_delivery_crew: input.delivery_crew_id.is_some(),
    };
    authorize_order_update(auth.role, change)?;

    if !change.sets_status && !change.sets_delivery_crew {
        return Err(AppError::BadRequest(
            "Provide status and/or delivery_crew_id".into(),
        ));
    }

    let scope = order_scope(auth.role, auth.user_id);
    let existing = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|o| scope.contains(o.user_id, o.delivery_crew_id))
        .ok_or_else(|| not_found(id))?;

    if let Some(Some(crew_id)) = input.delivery_crew_id {
        if !GroupRepo::is_member(&state.pool, StaffGroup::DeliveryCrew, crew_id).await? {
            return Err(AppError::Core(CoreError::Validation(format!(
                "User {crew_id} is not a member of the {} group",
                StaffGroup::DeliveryCrew.name()
            ))));
        }
    }

    let update = UpdateOrder {
        status: input.status,
        delivery_crew_id: input.delivery_crew_id,
    };
    let order = OrderRepo::update(&state.pool, existing.id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;
    let order_lines = OrderRepo::lines_for_orders(&state.pool, &[order.id]).await?;

    tracing::info!(
        order_id = id,
        user_id = auth.user_id,
        role = %auth.role,
        status = order.status,
        delivery_crew_id = ?order.delivery_crew_id,
        "Order updated"
    );

    Ok(Json(OrderWithLines { order, order_lines }))
}
