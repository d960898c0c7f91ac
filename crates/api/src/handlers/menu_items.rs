//! Handlers for the `/menu-items` resource.
//!
//! Reads are public; writes require a manager or super-admin. Prices are
//! normalized to two decimal places before they are stored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use restaurant_core::catalog::validate_title;
use restaurant_core::error::CoreError;
use restaurant_core::pricing::normalize_price;
use restaurant_core::types::DbId;
use restaurant_db::models::menu_item::{
    CreateMenuItem, MenuItem, MenuItemListParams, UpdateMenuItem,
};
use restaurant_db::repositories::{CategoryRepo, MenuItemRepo};
use restaurant_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

/// GET /api/menu-items
///
/// Supports `search` (category title), `category`, `featured`, `ordering`,
/// `limit` and `offset`.
pub async fn list_menu_items(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MenuItemListParams>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = MenuItemRepo::list(&state.pool, &params).await?;
    Ok(Json(items))
}

/// POST /api/menu-items
pub async fn create_menu_item(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateMenuItem>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    input.price = normalize_price(input.price)?;
    ensure_category_exists(&state.pool, input.category_id).await?;

    let item = MenuItemRepo::create(&state.pool, &input).await?;

    tracing::info!(menu_item_id = item.id, user_id = user.user_id, "Menu item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/menu-items/{id}
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MenuItem>> {
    let item = MenuItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Menu item",
            id,
        }))?;
    Ok(Json(item))
}

/// PUT /api/menu-items/{id}
///
/// Full replacement: `title`, `price` and `category_id` are required;
/// `featured` defaults to `false`.
pub async fn replace_menu_item(
    manager: RequireManager,
    state: State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CreateMenuItem>,
) -> AppResult<Json<MenuItem>> {
    apply_update(manager, state, id, input.into()).await
}

/// PATCH /api/menu-items/{id}
pub async fn update_menu_item(
    manager: RequireManager,
    state: State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateMenuItem>,
) -> AppResult<Json<MenuItem>> {
    apply_update(manager, state, id, input).await
}

/// DELETE /api/menu-items/{id}
///
/// Cart lines for the item go with it. Placed orders keep their lines.
pub async fn delete_menu_item(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MenuItemRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Menu item",
            id,
        }));
    }

    tracing::info!(menu_item_id = id, user_id = user.user_id, "Menu item deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn apply_update(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    id: DbId,
    mut input: UpdateMenuItem,
) -> AppResult<Json<MenuItem>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(price) = input.price {
        input.price = Some(normalize_price(price)?);
    }
    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state.pool, category_id).await?;
    }

    let item = MenuItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Menu item",
            id,
        }))?;

    tracing::info!(menu_item_id = id, user_id = user.user_id, "Menu item updated");

    Ok(Json(item))
}

async fn ensure_category_exists(pool: &DbPool, category_id: DbId) -> AppResult<()> {
    CategoryRepo::find_by_id(pool, category_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))
}
