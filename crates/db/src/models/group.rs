//! Staff group membership rows.

use restaurant_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A member of a staff group as listed by the roster endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupMember {
    pub id: DbId,
    pub username: String,
    pub email: String,
}
