use uuid::Uuid;

use pasar_core::identity::Identity;
use pasar_domain::account::Role;
use pasar_shop::error::ShopServiceError;
use pasar_shop::usecase::gate::CallerGate;

use crate::helpers::{MockAccountRepo, test_account};

#[tokio::test]
async fn should_resolve_a_known_caller() {
    let account = test_account("alice", "alice@example.com", Role::Customer, 0);
    let identity = Identity {
        user_id: account.id,
    };
    let gate = CallerGate {
        repo: MockAccountRepo::new(vec![account]),
    };

    let caller = gate.require_user(&identity).await.unwrap();
    assert_eq!(caller.email, "alice@example.com");
}

#[tokio::test]
async fn should_reject_an_unknown_caller_as_unauthorized() {
    let gate = CallerGate {
        repo: MockAccountRepo::empty(),
    };
    let identity = Identity {
        user_id: Uuid::now_v7(),
    };

    let result = gate.require_user(&identity).await;
    assert!(matches!(result, Err(ShopServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_admit_admins_to_user_operations() {
    let admin = test_account("admin", "admin@example.com", Role::Admin, 0);
    let identity = Identity { user_id: admin.id };
    let gate = CallerGate {
        repo: MockAccountRepo::new(vec![admin]),
    };

    assert!(gate.require_user(&identity).await.is_ok());
    assert!(gate.require_admin(&identity).await.is_ok());
}

#[tokio::test]
async fn should_forbid_customers_from_admin_operations() {
    let customer = test_account("alice", "alice@example.com", Role::Customer, 0);
    let identity = Identity {
        user_id: customer.id,
    };
    let gate = CallerGate {
        repo: MockAccountRepo::new(vec![customer]),
    };

    let result = gate.require_admin(&identity).await;
    assert!(matches!(result, Err(ShopServiceError::Forbidden)));
}

#[tokio::test]
async fn should_leave_the_target_untouched_when_the_caller_is_forbidden() {
    // Handlers gate before constructing any usecase; a customer identity
    // never reaches DeleteAccountUseCase, so the target row survives.
    let customer = test_account("alice", "alice@example.com", Role::Customer, 0);
    let target = test_account("bob", "bob@example.com", Role::Customer, 50);
    let target_id = target.id;
    let identity = Identity {
        user_id: customer.id,
    };

    let repo = MockAccountRepo::new(vec![customer, target]);
    let accounts = repo.accounts_handle();
    let gate = CallerGate { repo };

    let gated = gate.require_admin(&identity).await;
    assert!(matches!(gated, Err(ShopServiceError::Forbidden)));

    let accounts = accounts.lock().unwrap();
    assert_eq!(accounts.len(), 2);
    assert!(accounts.iter().any(|account| account.id == target_id));
}
