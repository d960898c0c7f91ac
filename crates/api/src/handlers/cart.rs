//! Handlers for the caller's cart (`/cart/menu-items`).
//!
//! Every operation acts on the authenticated caller's own cart.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::pricing::line_price;
use restaurant_core::types::DbId;
use restaurant_db::models::cart::{CartLine, NewCartLine};
use restaurant_db::repositories::{CartRepo, MenuItemRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Request body for `POST /api/cart/menu-items`.
///
/// The unit price is always taken from the catalog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[serde(alias = "menuitem")]
    pub menuitem_id: DbId,
    #[validate(range(min = 1))]
    pub quantity: i16,
}

/// GET /api/cart/menu-items
pub async fn list_cart(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CartLine>>> {
    let lines = CartRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(lines))
}

/// POST /api/cart/menu-items
///
/// Adding an item already in the cart is a conflict; the existing line is
/// left unchanged.
pub async fn add_to_cart(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    AppJson(input): AppJson<AddToCartRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let item = MenuItemRepo::find_by_id(&state.pool, input.menuitem_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Menu item",
            id: input.menuitem_id,
        }))?;

    let price = line_price(input.quantity, item.price)?;

    let line = CartRepo::add(
        &state.pool,
        &NewCartLine {
            user_id: user.user_id,
            menuitem_id: item.id,
            quantity: input.quantity,
            unit_price: item.price,
            price,
        },
    )
    .await?;

    tracing::info!(
        cart_line_id = line.id,
        menuitem_id = item.id,
        user_id = user.user_id,
        "Item added to cart"
    );

    Ok((StatusCode::CREATED, Json(line)))
}

/// DELETE /api/cart/menu-items
///
/// Succeeds even when the cart is already empty.
pub async fn clear_cart(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    let removed = CartRepo::clear(&state.pool, user.user_id).await?;

    tracing::info!(user_id = user.user_id, removed, "Cart cleared");

    Ok(StatusCode::NO_CONTENT)
}
