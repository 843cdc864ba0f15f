#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Account, AccountUpdate, Category, ShippingAddress};
use crate::error::ShopServiceError;

/// Repository for accounts.
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, ShopServiceError>;

    async fn list(&self) -> Result<Vec<Account>, ShopServiceError>;

    /// Insert a new account. A duplicate email fails with `EmailTaken`.
    async fn create(&self, account: &Account) -> Result<(), ShopServiceError>;

    /// Overwrite the four shipping fields on one account.
    async fn update_shipping_address(
        &self,
        id: Uuid,
        address: &ShippingAddress,
    ) -> Result<(), ShopServiceError>;

    /// Apply a signed delta to the account's balance and return the new value.
    ///
    /// Must serialize concurrent adjustments on the same account (row lock)
    /// and reject out-of-range results with `BalanceOutOfRange`, leaving the
    /// stored balance untouched.
    async fn adjust_balance(&self, id: Uuid, delta: i64) -> Result<i64, ShopServiceError>;

    /// Full overwrite of the account's mutable fields. `AccountNotFound` if
    /// the id is absent.
    async fn overwrite(&self, id: Uuid, update: &AccountUpdate) -> Result<(), ShopServiceError>;

    /// Delete an account. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ShopServiceError>;
}

/// Read-side repository over orders and their line items.
pub trait SalesRepository: Send + Sync {
    /// Sum of line-item quantities across all finished orders. Zero when
    /// there are none.
    async fn total_finished_quantity(&self) -> Result<i64, ShopServiceError>;
}

/// Repository for product categories.
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, ShopServiceError>;
}
