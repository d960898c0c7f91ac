//! Staff groups and the per-request role classification.
//!
//! Group names must match the seed data in
//! `20240101000002_create_groups_table.sql`.

use serde::Serialize;

/// Name of the group whose members manage the catalog and all orders.
pub const GROUP_MANAGER: &str = "Manager";

/// Name of the group whose members deliver orders.
pub const GROUP_DELIVERY_CREW: &str = "Delivery Crew";

/// A named staff group a user can be a member of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StaffGroup {
    Manager,
    DeliveryCrew,
}

impl StaffGroup {
    /// The persisted group name.
    pub fn name(self) -> &'static str {
        match self {
            StaffGroup::Manager => GROUP_MANAGER,
            StaffGroup::DeliveryCrew => GROUP_DELIVERY_CREW,
        }
    }

    /// Map a persisted group name back to a known group. Unknown names are
    /// ignored by role resolution.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            GROUP_MANAGER => Some(StaffGroup::Manager),
            GROUP_DELIVERY_CREW => Some(StaffGroup::DeliveryCrew),
            _ => None,
        }
    }
}

/// The effective role of an authenticated identity.
///
/// Exactly one role applies per request. It is resolved from the user's
/// `is_superuser` flag and group memberships by [`Role::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Manager,
    DeliveryCrew,
    Customer,
}

impl Role {
    /// Classify an identity. Priority: super-admin, manager, delivery crew,
    /// customer.
    pub fn resolve<I>(is_superuser: bool, groups: I) -> Self
    where
        I: IntoIterator<Item = StaffGroup>,
    {
        if is_superuser {
            return Role::SuperAdmin;
        }

        let mut is_crew = false;
        for group in groups {
            match group {
                StaffGroup::Manager => return Role::Manager,
                StaffGroup::DeliveryCrew => is_crew = true,
            }
        }

        if is_crew {
            Role::DeliveryCrew
        } else {
            Role::Customer
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Manager => "manager",
            Role::DeliveryCrew => "delivery_crew",
            Role::Customer => "customer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superuser_flag_wins_over_groups() {
        let role = Role::resolve(true, [StaffGroup::DeliveryCrew]);
        assert_eq!(role, Role::SuperAdmin);
    }

    #[test]
    fn manager_outranks_delivery_crew() {
        let role = Role::resolve(false, [StaffGroup::DeliveryCrew, StaffGroup::Manager]);
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn crew_membership_alone() {
        assert_eq!(
            Role::resolve(false, [StaffGroup::DeliveryCrew]),
            Role::DeliveryCrew
        );
    }

    #[test]
    fn no_groups_is_customer() {
        assert_eq!(Role::resolve(false, []), Role::Customer);
    }

    #[test]
    fn group_names_round_trip() {
        for group in [StaffGroup::Manager, StaffGroup::DeliveryCrew] {
            assert_eq!(StaffGroup::from_name(group.name()), Some(group));
        }
        assert_eq!(StaffGroup::from_name("Kitchen"), None);
    }
}
