//! Repository for the `groups` and `user_groups` tables.
//!
//! Group rows are seeded by migration; only memberships change at runtime.

use restaurant_core::roles::StaffGroup;
use restaurant_core::types::DbId;
use sqlx::PgPool;

use crate::models::group::GroupMember;

/// Provides staff group membership operations.
pub struct GroupRepo;

impl GroupRepo {
    /// List the members of `group` ordered by username.
    pub async fn list_members(
        pool: &PgPool,
        group: StaffGroup,
    ) -> Result<Vec<GroupMember>, sqlx::Error> {
        sqlx::query_as::<_, GroupMember>(
            "SELECT u.id, u.username, u.email
             FROM users u
             JOIN user_groups ug ON ug.user_id = u.id
             JOIN groups g ON g.id = ug.group_id
             WHERE g.name = $1
             ORDER BY u.username ASC",
        )
        .bind(group.name())
        .fetch_all(pool)
        .await
    }

    /// Add `user_id` to `group`. Adding an existing member is a no-op.
    ///
    /// Returns `true` if a membership row was created.
    pub async fn add_member(
        pool: &PgPool,
        group: StaffGroup,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_groups (user_id, group_id)
             SELECT $1, id FROM groups WHERE name = $2
             ON CONFLICT (user_id, group_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(group.name())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove `user_id` from `group`. Removing a non-member is a no-op.
    ///
    /// Returns `true` if a membership row was deleted.
    pub async fn remove_member(
        pool: &PgPool,
        group: StaffGroup,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM user_groups
             WHERE user_id = $1
               AND group_id = (SELECT id FROM groups WHERE name = $2)",
        )
        .bind(user_id)
        .bind(group.name())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether `user_id` belongs to `group`.
    pub async fn is_member(
        pool: &PgPool,
        group: StaffGroup,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM user_groups ug
                JOIN groups g ON g.id = ug.group_id
                WHERE ug.user_id = $1 AND g.name = $2
             )",
        )
        .bind(user_id)
        .bind(group.name())
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// The known staff groups `user_id` belongs to.
    pub async fn groups_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<StaffGroup>, sqlx::Error> {
        let names: Vec<(String,)> = sqlx::query_as(
            "SELECT g.name FROM groups g
             JOIN user_groups ug ON ug.group_id = g.id
             WHERE ug.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(names
            .into_iter()
            .filter_map(|(name,)| StaffGroup::from_name(&name))
            .collect())
    }
}
