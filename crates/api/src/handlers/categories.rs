//! Handlers for the `/categories` resource.
//!
//! Reads are public; writes require a manager or super-admin.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use restaurant_core::catalog::{validate_slug, validate_title};
use restaurant_core::error::CoreError;
use restaurant_core::types::DbId;
use restaurant_db::models::category::{Category, CreateCategory, UpdateCategory};
use restaurant_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create_category(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    validate_slug(&input.slug)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, user_id = user.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// PUT /api/categories/{id}
///
/// Full replacement: both `title` and `slug` are required.
pub async fn replace_category(
    manager: RequireManager,
    state: State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<Json<Category>> {
    apply_update(manager, state, id, input.into()).await
}

/// PATCH /api/categories/{id}
pub async fn update_category(
    manager: RequireManager,
    state: State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    apply_update(manager, state, id, input).await
}

/// DELETE /api/categories/{id}
///
/// Refused with 409 while any menu item still belongs to the category.
pub async fn delete_category(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let referenced = CategoryRepo::count_menu_items(&state.pool, id).await?;
    if referenced > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Category {id} is used by {referenced} menu item(s)"
        ))));
    }

    // The foreign key still guards against an item added in between.
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, user_id = user.user_id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}

async fn apply_update(
    RequireManager(user): RequireManager,
    State(state): State<AppState>,
    id: DbId,
    input: UpdateCategory,
) -> AppResult<Json<Category>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    tracing::info!(category_id = id, user_id = user.user_id, "Category updated");

    Ok(Json(category))
}
