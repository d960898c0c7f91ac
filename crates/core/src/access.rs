//! Access policy: which role may do what.
//!
//! Handlers never inspect group membership directly; they ask these
//! functions with the [`Role`] resolved for the request.

use crate::error::CoreError;
use crate::roles::{Role, StaffGroup};
use crate::types::DbId;

/// Which orders a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    /// Every order.
    All,
    /// Orders placed by the given user.
    OwnedBy(DbId),
    /// Orders assigned to the given delivery crew member.
    AssignedTo(DbId),
}

impl OrderScope {
    /// Whether an order with the given owner and crew falls inside this scope.
    pub fn contains(self, owner_id: DbId, delivery_crew_id: Option<DbId>) -> bool {
        match self {
            OrderScope::All => true,
            OrderScope::OwnedBy(user_id) => owner_id == user_id,
            OrderScope::AssignedTo(user_id) => delivery_crew_id == Some(user_id),
        }
    }
}

/// Order visibility for `role` acting as `user_id`.
pub fn order_scope(role: Role, user_id: DbId) -> OrderScope {
    match role {
        Role::SuperAdmin | Role::Manager => OrderScope::All,
        Role::DeliveryCrew => OrderScope::AssignedTo(user_id),
        Role::Customer => OrderScope::OwnedBy(user_id),
    }
}

/// Categories and menu items may only be written by managers and super-admins.
pub fn can_manage_catalog(role: Role) -> bool {
    matches!(role, Role::SuperAdmin | Role::Manager)
}

/// Whether `role` may add or remove members of `group`.
pub fn can_manage_group(role: Role, group: StaffGroup) -> bool {
    match group {
        StaffGroup::Manager => role == Role::SuperAdmin,
        StaffGroup::DeliveryCrew => can_manage_catalog(role),
    }
}

/// Whether `role` may list the members of `group`.
pub fn can_view_group(role: Role, group: StaffGroup) -> bool {
    match group {
        StaffGroup::Manager => role == Role::SuperAdmin,
        StaffGroup::DeliveryCrew => true,
    }
}

/// The fields an order update touches.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderChange {
    pub sets_status: bool,
    pub sets_delivery_crew: bool,
}

/// Authorize an order update. Visibility (scope) is checked separately.
///
/// Customers may never update orders. Delivery crew may only change the
/// status. Managers and super-admins may change anything.
pub fn authorize_order_update(role: Role, change: OrderChange) -> Result<(), CoreError> {
    match role {
        Role::SuperAdmin | Role::Manager => Ok(()),
        Role::DeliveryCrew if change.sets_delivery_crew => Err(CoreError::Forbidden(
            "Delivery crew cannot reassign orders".into(),
        )),
        Role::DeliveryCrew => Ok(()),
        Role::Customer => Err(CoreError::Forbidden(
            "Customers cannot update orders".into(),
        )),
    }
}
