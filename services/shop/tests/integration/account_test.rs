use uuid::Uuid;

use pasar_domain::account::Role;
use pasar_shop::credential;
use pasar_shop::domain::types::AccountUpdate;
use pasar_shop::error::ShopServiceError;
use pasar_shop::usecase::account::{
    AdjustBalanceUseCase, AdminUpdateAccountUseCase, CreateAccountInput, CreateAccountUseCase,
    DeleteAccountUseCase, GetAccountUseCase, ListAccountsUseCase, UpdateShippingAddressInput,
    UpdateShippingAddressUseCase,
};

use crate::helpers::{MockAccountRepo, test_account};

// ── Balance adjustment ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_apply_delta_and_persist_new_balance() {
    let account = test_account("alice", "alice@example.com", Role::Customer, 100);
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let accounts = repo.accounts_handle();

    let usecase = AdjustBalanceUseCase { repo };
    assert_eq!(usecase.execute(id, 25).await.unwrap(), 125);
    assert_eq!(usecase.execute(id, -125).await.unwrap(), 0);

    assert_eq!(accounts.lock().unwrap()[0].balance, 0);
}

#[tokio::test]
async fn should_reject_overflow_and_leave_balance_unchanged() {
    let account = test_account("alice", "alice@example.com", Role::Customer, i64::MAX - 1);
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let accounts = repo.accounts_handle();

    let usecase = AdjustBalanceUseCase { repo };
    let result = usecase.execute(id, 2).await;

    assert!(matches!(result, Err(ShopServiceError::BalanceOutOfRange)));
    assert_eq!(accounts.lock().unwrap()[0].balance, i64::MAX - 1);
}

#[tokio::test]
async fn should_reject_negative_result_and_leave_balance_unchanged() {
    let account = test_account("alice", "alice@example.com", Role::Customer, 10);
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let accounts = repo.accounts_handle();

    let usecase = AdjustBalanceUseCase { repo };
    let result = usecase.execute(id, -11).await;

    assert!(matches!(result, Err(ShopServiceError::BalanceOutOfRange)));
    assert_eq!(accounts.lock().unwrap()[0].balance, 10);
}

// ── Deletion ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_refuse_self_deletion_and_keep_the_admin_account() {
    let admin = test_account("admin", "admin@example.com", Role::Admin, 0);
    let repo = MockAccountRepo::new(vec![admin.clone()]);
    let accounts = repo.accounts_handle();

    let usecase = DeleteAccountUseCase { repo };
    let result = usecase.execute(&admin, admin.id).await;

    assert!(matches!(result, Err(ShopServiceError::CannotDeleteSelf)));
    assert_eq!(accounts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_delete_another_account() {
    let admin = test_account("admin", "admin@example.com", Role::Admin, 0);
    let target = test_account("bob", "bob@example.com", Role::Customer, 50);
    let target_id = target.id;
    let repo = MockAccountRepo::new(vec![admin.clone(), target]);
    let accounts = repo.accounts_handle();

    let usecase = DeleteAccountUseCase { repo };
    usecase.execute(&admin, target_id).await.unwrap();

    assert!(
        !accounts
            .lock()
            .unwrap()
            .iter()
            .any(|account| account.id == target_id)
    );
}

#[tokio::test]
async fn should_report_not_found_for_missing_delete_target() {
    let admin = test_account("admin", "admin@example.com", Role::Admin, 0);
    let usecase = DeleteAccountUseCase {
        repo: MockAccountRepo::new(vec![admin.clone()]),
    };
    let result = usecase.execute(&admin, Uuid::now_v7()).await;
    assert!(matches!(result, Err(ShopServiceError::AccountNotFound)));
}

// ── Creation ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_conflict_on_duplicate_email_and_keep_the_first_account() {
    let repo = MockAccountRepo::empty();
    let accounts = repo.accounts_handle();
    let usecase = CreateAccountUseCase { repo };

    let input = |name: &str| CreateAccountInput {
        name: name.into(),
        email: "carol@example.com".into(),
        password: "correct horse".into(),
        phone_number: "+62-811-000-333".into(),
        is_admin: false,
    };
    usecase.execute(input("carol")).await.unwrap();
    let result = usecase.execute(input("impostor")).await;

    assert!(matches!(result, Err(ShopServiceError::EmailTaken)));
    let accounts = accounts.lock().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, "carol");
}

#[tokio::test]
async fn should_store_a_verifiable_digest_never_the_plaintext() {
    let repo = MockAccountRepo::empty();
    let accounts = repo.accounts_handle();
    let usecase = CreateAccountUseCase { repo };

    usecase
        .execute(CreateAccountInput {
            name: "dave".into(),
            email: "dave@example.com".into(),
            password: "correct horse".into(),
            phone_number: "+62-811-000-444".into(),
            is_admin: false,
        })
        .await
        .unwrap();

    let accounts = accounts.lock().unwrap();
    let stored = &accounts[0];
    assert_ne!(stored.password_digest, "correct horse");
    assert!(credential::verify("correct horse", &stored.password_digest).unwrap());
    assert!(!credential::verify("wrong horse", &stored.password_digest).unwrap());
}

// ── Shipping address ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_overwrite_all_four_shipping_fields() {
    let account = test_account("alice", "alice@example.com", Role::Customer, 0);
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let accounts = repo.accounts_handle();

    let usecase = UpdateShippingAddressUseCase { repo };
    usecase
        .execute(
            id,
            UpdateShippingAddressInput {
                address_name: "home".into(),
                phone_number: "+62-811-999-000".into(),
                address: "Jl. Sudirman 1".into(),
                city: "Jakarta".into(),
            },
        )
        .await
        .unwrap();

    let accounts = accounts.lock().unwrap();
    let updated = &accounts[0];
    assert_eq!(updated.address_name.as_deref(), Some("home"));
    assert_eq!(updated.phone_number, "+62-811-999-000");
    assert_eq!(updated.address.as_deref(), Some("Jl. Sudirman 1"));
    assert_eq!(updated.city.as_deref(), Some("Jakarta"));
}

#[tokio::test]
async fn should_reject_blank_shipping_fields_without_writing() {
    let account = test_account("alice", "alice@example.com", Role::Customer, 0);
    let id = account.id;
    let repo = MockAccountRepo::new(vec![account]);
    let accounts = repo.accounts_handle();

    let usecase = UpdateShippingAddressUseCase { repo };
    let result = usecase
        .execute(
            id,
            UpdateShippingAddressInput {
                address_name: "home".into(),
                phone_number: "+62-811-999-000".into(),
                address: String::new(),
                city: "Jakarta".into(),
            },
        )
        .await;

    assert!(matches!(result, Err(ShopServiceError::MissingData)));
    assert_eq!(accounts.lock().unwrap()[0].address, None);
}

// ── Admin overwrite / lookup ─────────────────────────────────────────────────

fn full_update(email: &str, balance: i64) -> AccountUpdate {
    AccountUpdate {
        name: "renamed".into(),
        email: email.into(),
        phone_number: "+62-811-777-000".into(),
        address_name: Some("office".into()),
        address: Some("Jl. Thamrin 10".into()),
        city: Some("Bandung".into()),
        balance,
        role: Role::Customer,
    }
}

#[tokio::test]
async fn should_overwrite_all_mutable_fields() {
    let target = test_account("bob", "bob@example.com", Role::Customer, 5);
    let id = target.id;
    let repo = MockAccountRepo::new(vec![target]);
    let accounts = repo.accounts_handle();

    let usecase = AdminUpdateAccountUseCase { repo };
    usecase
        .execute(id, full_update("bob@example.com", 42))
        .await
        .unwrap();

    let accounts = accounts.lock().unwrap();
    let updated = &accounts[0];
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.balance, 42);
    assert_eq!(updated.city.as_deref(), Some("Bandung"));
}

#[tokio::test]
async fn should_report_not_found_for_missing_update_target() {
    let usecase = AdminUpdateAccountUseCase {
        repo: MockAccountRepo::empty(),
    };
    let result = usecase
        .execute(Uuid::now_v7(), full_update("ghost@example.com", 0))
        .await;
    assert!(matches!(result, Err(ShopServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_list_every_account() {
    let usecase = ListAccountsUseCase {
        repo: MockAccountRepo::new(vec![
            test_account("alice", "alice@example.com", Role::Customer, 0),
            test_account("admin", "admin@example.com", Role::Admin, 0),
        ]),
    };
    let accounts = usecase.execute().await.unwrap();
    assert_eq!(accounts.len(), 2);
}

#[tokio::test]
async fn should_get_account_by_id_or_not_found() {
    let account = test_account("alice", "alice@example.com", Role::Customer, 7);
    let id = account.id;
    let usecase = GetAccountUseCase {
        repo: MockAccountRepo::new(vec![account]),
    };

    assert_eq!(usecase.execute(id).await.unwrap().balance, 7);
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(ShopServiceError::AccountNotFound)));
}
