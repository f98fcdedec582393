//! Unit tests for the order ledger

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::order::{OrderStatus, PizzaSize};
use crate::errors::{DomainError, ErrorKind, OrderError};
use crate::repositories::InMemoryOrderRepository;
use crate::services::orders::OrderLedger;

fn create_ledger() -> OrderLedger<InMemoryOrderRepository> {
    OrderLedger::new(Arc::new(InMemoryOrderRepository::new()))
}

fn account(name: &str, is_staff: bool) -> Account {
    Account::new(
        name.to_string(),
        format!("{}@example.com", name),
        String::new(),
    )
    .with_staff(is_staff)
}

#[tokio::test]
async fn test_place_then_get() {
    let ledger = create_ledger();
    let alice = account("alice", false);

    let order = ledger.place(&alice, 2, PizzaSize::Large).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.owner_id, alice.id);
    assert_eq!(order.quantity, 2);
    assert_eq!(order.size, PizzaSize::Large);

    assert_eq!(ledger.get(&alice, order.id).await.unwrap(), order);
}

#[tokio::test]
async fn test_place_rejects_non_positive_quantity() {
    let ledger = create_ledger();
    let alice = account("alice", false);

    for quantity in [0, -3, i64::from(i32::MAX) + 1] {
        let err = ledger.place(&alice, quantity, PizzaSize::Small).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Order(OrderError::InvalidQuantity { value: quantity })
        );
    }
    assert!(ledger.repository().is_empty().await);
}

#[tokio::test]
async fn test_owner_staff_and_stranger_permissions() {
    let ledger = create_ledger();
    let owner = account("alice", false);
    let staff = account("bob", true);
    let stranger = account("carol", false);

    let order = ledger.place(&owner, 1, PizzaSize::Small).await.unwrap();

    // Stranger: every owner-or-staff operation is forbidden
    assert_eq!(
        ledger.get(&stranger, order.id).await.unwrap_err(),
        DomainError::Unauthorized
    );
    assert_eq!(
        ledger
            .update_fields(&stranger, order.id, 3, PizzaSize::Medium)
            .await
            .unwrap_err(),
        DomainError::Unauthorized
    );
    assert_eq!(
        ledger.delete(&stranger, order.id).await.unwrap_err(),
        DomainError::Unauthorized
    );

    // Owner: view and edit, but never status
    assert!(ledger.get(&owner, order.id).await.is_ok());
    let edited = ledger
        .update_fields(&owner, order.id, 3, PizzaSize::Medium)
        .await
        .unwrap();
    assert_eq!(edited.quantity, 3);
    assert_eq!(
        ledger
            .set_status(&owner, order.id, "DELIVERED")
            .await
            .unwrap_err(),
        DomainError::Unauthorized
    );

    // Staff: everything
    assert!(ledger.get(&staff, order.id).await.is_ok());
    assert!(ledger.update_fields(&staff, order.id, 4, PizzaSize::Large).await.is_ok());
    assert!(ledger.set_status(&staff, order.id, "PROCESSING").await.is_ok());
    assert!(ledger.list_all(&staff).await.unwrap().iter().any(|o| o.id == order.id));
    let removed = ledger.delete(&staff, order.id).await.unwrap();
    assert_eq!(removed.status, OrderStatus::Processing);
}

#[tokio::test]
async fn test_owner_can_delete() {
    let ledger = create_ledger();
    let owner = account("alice", false);
    let order = ledger.place(&owner, 1, PizzaSize::Small).await.unwrap();

    let removed = ledger.delete(&owner, order.id).await.unwrap();
    assert_eq!(removed, order);
    assert_eq!(
        ledger.get(&owner, order.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[tokio::test]
async fn test_list_all_is_staff_only() {
    let ledger = create_ledger();
    let alice = account("alice", false);
    let dave = account("dave", false);
    let staff = account("bob", true);

    ledger.place(&alice, 1, PizzaSize::Small).await.unwrap();
    ledger.place(&dave, 2, PizzaSize::Medium).await.unwrap();

    assert_eq!(
        ledger.list_all(&alice).await.unwrap_err(),
        DomainError::Unauthorized
    );
    assert_eq!(ledger.list_all(&staff).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_for_returns_only_own_orders() {
    let ledger = create_ledger();
    let alice = account("alice", false);
    let dave = account("dave", false);

    let mine = ledger.place(&alice, 1, PizzaSize::Small).await.unwrap();
    ledger.place(&dave, 2, PizzaSize::Medium).await.unwrap();

    let listed = ledger.list_for(&alice).await.unwrap();
    assert_eq!(listed, vec![mine]);
    assert!(ledger.list_for(&account("nobody", false)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_own_hides_foreign_orders() {
    let ledger = create_ledger();
    let alice = account("alice", false);
    let staff = account("bob", true);

    let order = ledger.place(&alice, 1, PizzaSize::Small).await.unwrap();

    assert_eq!(ledger.get_own(&alice, order.id).await.unwrap(), order);
    // Not Unauthorized, even for staff
    assert_eq!(
        ledger.get_own(&staff, order.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[tokio::test]
async fn test_set_status_changes_only_status() {
    let ledger = create_ledger();
    let alice = account("alice", false);
    let staff = account("bob", true);
    let order = ledger.place(&alice, 2, PizzaSize::Large).await.unwrap();

    let updated = ledger.set_status(&staff, order.id, "DELIVERED").await.unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);

    let fetched = ledger.get(&alice, order.id).await.unwrap();
    assert_eq!(fetched.status, OrderStatus::Delivered);
    assert_eq!(fetched.quantity, 2);
    assert_eq!(fetched.size, PizzaSize::Large);
}

#[tokio::test]
async fn test_set_status_rejects_unknown_values() {
    let ledger = create_ledger();
    let staff = account("bob", true);
    let order = ledger.place(&staff, 1, PizzaSize::Small).await.unwrap();

    for value in ["SHIPPED", "delivered", "", " PENDING"] {
        let err = ledger.set_status(&staff, order.id, value).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidStatus);
    }
    assert_eq!(
        ledger.get(&staff, order.id).await.unwrap().status,
        OrderStatus::Pending
    );
}

#[tokio::test]
async fn test_update_fields_keeps_status() {
    let ledger = create_ledger();
    let staff = account("bob", true);
    let order = ledger.place(&staff, 1, PizzaSize::Small).await.unwrap();
    ledger.set_status(&staff, order.id, "IN_TRANSIT").await.unwrap();

    let updated = ledger
        .update_fields(&staff, order.id, 6, PizzaSize::Medium)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::InTransit);
    assert_eq!(updated.quantity, 6);
}

#[tokio::test]
async fn test_update_fields_validates_quantity_after_policy() {
    let ledger = create_ledger();
    let alice = account("alice", false);
    let stranger = account("carol", false);
    let order = ledger.place(&alice, 1, PizzaSize::Small).await.unwrap();

    assert_eq!(
        ledger
            .update_fields(&stranger, order.id, 0, PizzaSize::Small)
            .await
            .unwrap_err(),
        DomainError::Unauthorized
    );
    assert_eq!(
        ledger
            .update_fields(&alice, order.id, 0, PizzaSize::Small)
            .await
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidQuantity
    );
}

#[tokio::test]
async fn test_missing_order_is_not_found_for_every_role() {
    let ledger = create_ledger();
    let missing = Uuid::new_v4();

    for actor in [account("alice", false), account("bob", true)] {
        assert_eq!(
            ledger.delete(&actor, missing).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ledger.get(&actor, missing).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ledger
                .update_fields(&actor, missing, 1, PizzaSize::Small)
                .await
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ledger
                .set_status(&actor, missing, "DELIVERED")
                .await
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_delete_has_one_winner() {
    let ledger = Arc::new(create_ledger());
    let staff = account("bob", true);
    let order = ledger.place(&staff, 1, PizzaSize::Small).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ledger = Arc::clone(&ledger);
        let staff = staff.clone();
        handles.push(tokio::spawn(async move { ledger.delete(&staff, order.id).await }));
    }

    let mut deleted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => deleted += 1,
            Err(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
        }
    }
    assert_eq!(deleted, 1);
}
