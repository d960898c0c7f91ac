//! Creation of the configured super-admin account at startup.

use restaurant_db::models::user::CreateUser;
use restaurant_db::repositories::UserRepo;
use restaurant_db::DbPool;

use super::password::hash_password;
use crate::config::AdminBootstrap;
use crate::error::{AppError, AppResult};

/// Ensure the configured super-admin exists.
///
/// Does nothing if a user with the same username is already present; an
/// existing account is never modified. Returns `true` if a user was created.
pub async fn ensure_super_admin(pool: &DbPool, admin: &AdminBootstrap) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Super-admin already exists");
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            is_superuser: true,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Super-admin created");
    Ok(true)
}
