//! Handlers for the staff rosters (`/groups/manager/users` and
//! `/groups/delivery-crew/users`).
//!
//! The manager roster is visible to and managed by super-admins only. The
//! delivery-crew roster is visible to any authenticated user and managed by
//! managers and super-admins. Adding and removing are idempotent.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use restaurant_core::access::{can_manage_group, can_view_group};
use restaurant_core::error::CoreError;
use restaurant_core::roles::StaffGroup;
use restaurant_db::models::group::GroupMember;
use restaurant_db::models::user::User;
use restaurant_db::repositories::{GroupRepo, UserRepo};
use restaurant_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireSuperAdmin;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for adding or removing a roster member.
#[derive(Debug, Deserialize)]
pub struct RosterRequest {
    pub username: String,
}

// ---------------------------------------------------------------------------
// Manager roster
// ---------------------------------------------------------------------------

/// GET /api/groups/manager/users
pub async fn list_managers(
    RequireSuperAdmin(auth): RequireSuperAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<GroupMember>>> {
    list_members(&state.pool, &auth, StaffGroup::Manager).await
}

/// POST /api/groups/manager/users
pub async fn add_manager(
    RequireSuperAdmin(auth): RequireSuperAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<RosterRequest>,
) -> AppResult<impl IntoResponse> {
    add_member(&state.pool, &auth, StaffGroup::Manager, &input.username).await
}

/// DELETE /api/groups/manager/users
pub async fn remove_manager(
    RequireSuperAdmin(auth): RequireSuperAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<RosterRequest>,
) -> AppResult<Json<MessageResponse>> {
    remove_member(&state.pool, &auth, StaffGroup::Manager, &input.username).await
}

// ---------------------------------------------------------------------------
// Delivery-crew roster
// ---------------------------------------------------------------------------

/// GET /api/groups/delivery-crew/users
pub async fn list_delivery_crew(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<GroupMember>>> {
    list_members(&state.pool, &auth, StaffGroup::DeliveryCrew).await
}

/// POST /api/groups/delivery-crew/users
pub async fn add_delivery_crew(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RosterRequest>,
) -> AppResult<impl IntoResponse> {
    add_member(&state.pool, &auth, StaffGroup::DeliveryCrew, &input.username).await
}

/// DELETE /api/groups/delivery-crew/users
pub async fn remove_delivery_crew(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RosterRequest>,
) -> AppResult<Json<MessageResponse>> {
    remove_member(&state.pool, &auth, StaffGroup::DeliveryCrew, &input.username).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn list_members(
    pool: &DbPool,
    auth: &AuthUser,
    group: StaffGroup,
) -> AppResult<Json<Vec<GroupMember>>> {
    if !can_view_group(auth.role, group) {
        return Err(forbidden(group));
    }
    let members = GroupRepo::list_members(pool, group).await?;
    Ok(Json(members))
}

async fn add_member(
    pool: &DbPool,
    auth: &AuthUser,
    group: StaffGroup,
    username: &str,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if !can_manage_group(auth.role, group) {
        return Err(forbidden(group));
    }
    let user = find_user(pool, username).await?;
    let created = GroupRepo::add_member(pool, group, user.id).await?;

    tracing::info!(
        member_id = user.id,
        group = group.name(),
        created,
        user_id = auth.user_id,
        "Roster member added"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "user added to the {} group",
            roster_label(group)
        ))),
    ))
}

async fn remove_member(
    pool: &DbPool,
    auth: &AuthUser,
    group: StaffGroup,
    username: &str,
) -> AppResult<Json<MessageResponse>> {
    if !can_manage_group(auth.role, group) {
        return Err(forbidden(group));
    }
    let user = find_user(pool, username).await?;
    let removed = GroupRepo::remove_member(pool, group, user.id).await?;

    tracing::info!(
        member_id = user.id,
        group = group.name(),
        removed,
        user_id = auth.user_id,
        "Roster member removed"
    );

    Ok(Json(MessageResponse::new(format!(
        "user removed from the {} group",
        roster_label(group)
    ))))
}

async fn find_user(pool: &DbPool, username: &str) -> AppResult<User> {
    UserRepo::find_by_username(pool, username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{username}' not found")))
}

fn roster_label(group: StaffGroup) -> &'static str {
    match group {
        StaffGroup::Manager => "manager",
        StaffGroup::DeliveryCrew => "delivery crew",
    }
}

fn forbidden(group: StaffGroup) -> AppError {
    AppError::Core(CoreError::Forbidden(format!(
        "Not allowed to access the {} roster",
        roster_label(group)
    )))
}
