use chrono::Utc;
use uuid::Uuid;

use anyhow::Context as _;

use pasar_domain::account::Role;

use crate::credential;
use crate::domain::repository::AccountRepository;
use crate::domain::types::{Account, AccountUpdate, ShippingAddress};
use crate::error::ShopServiceError;

fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

// ── CreateAccount ────────────────────────────────────────────────────────────

pub struct CreateAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub is_admin: bool,
}

pub struct CreateAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> CreateAccountUseCase<R> {
    pub async fn execute(&self, input: CreateAccountInput) -> Result<(), ShopServiceError> {
        if ![&input.name, &input.email, &input.password, &input.phone_number]
            .iter()
            .all(|v| non_empty(v))
        {
            return Err(ShopServiceError::MissingData);
        }
        let pair = credential::hash(&input.password).context("hash password")?;
        let now = Utc::now();
        let account = Account {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password_digest: pair.digest,
            password_salt: pair.salt,
            phone_number: input.phone_number,
            address_name: None,
            address: None,
            city: None,
            balance: 0,
            role: Role::from_is_admin(input.is_admin),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&account).await
    }
}

// ── UpdateShippingAddress ────────────────────────────────────────────────────

pub struct UpdateShippingAddressInput {
    pub address_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
}

pub struct UpdateShippingAddressUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> UpdateShippingAddressUseCase<R> {
    /// Overwrite all four shipping fields on the caller's own account.
    pub async fn execute(
        &self,
        caller_id: Uuid,
        input: UpdateShippingAddressInput,
    ) -> Result<(), ShopServiceError> {
        if ![
            &input.address_name,
            &input.phone_number,
            &input.address,
            &input.city,
        ]
        .iter()
        .all(|v| non_empty(v))
        {
            return Err(ShopServiceError::MissingData);
        }
        let address = ShippingAddress {
            address_name: input.address_name,
            phone_number: input.phone_number,
            address: input.address,
            city: input.city,
        };
        self.repo.update_shipping_address(caller_id, &address).await
    }
}

// ── AdjustBalance ────────────────────────────────────────────────────────────

pub struct AdjustBalanceUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> AdjustBalanceUseCase<R> {
    /// Apply a signed delta to the caller's balance and return the new value.
    /// The repository serializes concurrent adjustments and rejects
    /// out-of-range results without writing.
    pub async fn execute(&self, caller_id: Uuid, delta: i64) -> Result<i64, ShopServiceError> {
        self.repo.adjust_balance(caller_id, delta).await
    }
}

// ── AdminUpdateAccount ───────────────────────────────────────────────────────

pub struct AdminUpdateAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> AdminUpdateAccountUseCase<R> {
    pub async fn execute(
        &self,
        target_id: Uuid,
        update: AccountUpdate,
    ) -> Result<(), ShopServiceError> {
        if ![&update.name, &update.email, &update.phone_number]
            .iter()
            .all(|v| non_empty(v))
        {
            return Err(ShopServiceError::MissingData);
        }
        if update.balance < 0 {
            return Err(ShopServiceError::BalanceOutOfRange);
        }
        self.repo.overwrite(target_id, &update).await
    }
}

// ── DeleteAccount ────────────────────────────────────────────────────────────

pub struct DeleteAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> DeleteAccountUseCase<R> {
    /// Permanently delete the target account.
    ///
    /// The self-reference check runs before any store call, so an admin's own
    /// row is never touched.
    pub async fn execute(&self, admin: &Account, target_id: Uuid) -> Result<(), ShopServiceError> {
        if admin.id == target_id {
            return Err(ShopServiceError::CannotDeleteSelf);
        }
        let deleted = self.repo.delete(target_id).await?;
        if !deleted {
            return Err(ShopServiceError::AccountNotFound);
        }
        Ok(())
    }
}

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetAccountUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Account, ShopServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ShopServiceError::AccountNotFound)
    }
}

// ── ListAccounts ─────────────────────────────────────────────────────────────

pub struct ListAccountsUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ListAccountsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Account>, ShopServiceError> {
        self.repo.list().await
    }
}
