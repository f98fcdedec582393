//! Order access rules
//!
//! Pure decision functions with no IO and no failure mode. A `false` is
//! turned into `DomainError::Unauthorized` by the caller.

use crate::domain::entities::account::Account;
use crate::domain::entities::order::Order;

/// Owner-or-staff for view/modify/delete, staff-only for list-all and status
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn can_list_all(actor: &Account) -> bool {
        actor.is_staff
    }

    pub fn can_view(actor: &Account, order: &Order) -> bool {
        Self::is_staff_or_owner(actor, order)
    }

    pub fn can_modify_fields(actor: &Account, order: &Order) -> bool {
        Self::is_staff_or_owner(actor, order)
    }

    /// Owners never change status; it tracks fulfillment progress
    pub fn can_change_status(actor: &Account, _order: &Order) -> bool {
        actor.is_staff
    }

    pub fn can_delete(actor: &Account, order: &Order) -> bool {
        Self::is_staff_or_owner(actor, order)
    }

    fn is_staff_or_owner(actor: &Account, order: &Order) -> bool {
        actor.is_staff || order.is_owned_by(actor.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::order::PizzaSize;

    fn account(name: &str, is_staff: bool) -> Account {
        Account::new(
            name.to_string(),
            format!("{}@example.com", name),
            String::new(),
        )
        .with_staff(is_staff)
    }

    #[test]
    fn test_owner_rules() {
        let owner = account("alice", false);
        let order = Order::new(owner.id, 1, PizzaSize::Small);

        assert!(!AccessPolicy::can_list_all(&owner));
        assert!(AccessPolicy::can_view(&owner, &order));
        assert!(AccessPolicy::can_modify_fields(&owner, &order));
        assert!(!AccessPolicy::can_change_status(&owner, &order));
        assert!(AccessPolicy::can_delete(&owner, &order));
    }

    #[test]
    fn test_stranger_rules() {
        let owner = account("alice", false);
        let stranger = account("carol", false);
        let order = Order::new(owner.id, 1, PizzaSize::Small);

        assert!(!AccessPolicy::can_list_all(&stranger));
        assert!(!AccessPolicy::can_view(&stranger, &order));
        assert!(!AccessPolicy::can_modify_fields(&stranger, &order));
        assert!(!AccessPolicy::can_change_status(&stranger, &order));
        assert!(!AccessPolicy::can_delete(&stranger, &order));
    }

    #[test]
    fn test_staff_rules() {
        let owner = account("alice", false);
        let staff = account("bob", true);
        let order = Order::new(owner.id, 1, PizzaSize::Small);

        assert!(AccessPolicy::can_list_all(&staff));
        assert!(AccessPolicy::can_view(&staff, &order));
        assert!(AccessPolicy::can_modify_fields(&staff, &order));
        assert!(AccessPolicy::can_change_status(&staff, &order));
        assert!(AccessPolicy::can_delete(&staff, &order));
    }

    #[test]
    fn test_inactive_staff_keeps_role_in_policy() {
        // Activity only gates authentication, not authorization
        let staff = account("bob", true).with_active(false);
        let order = Order::new(uuid::Uuid::new_v4(), 1, PizzaSize::Small);

        assert!(AccessPolicy::can_change_status(&staff, &order));
    }
}
