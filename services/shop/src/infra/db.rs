use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryFilter, QuerySelect, SqlErr, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use pasar_domain::account::Role;
use pasar_domain::balance::apply_delta;
use pasar_domain::order::OrderStatus;
use pasar_shop_schema::{categories, order_items, orders, users};

use crate::domain::repository::{AccountRepository, CategoryRepository, SalesRepository};
use crate::domain::types::{Account, AccountUpdate, Category, ShippingAddress};
use crate::error::ShopServiceError;

/// Remap store errors with a known signature before collapsing to internal.
/// The raw detail stays in the anyhow chain and is logged, never echoed.
fn classify_db_err(err: DbErr, ctx: &'static str) -> ShopServiceError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return ShopServiceError::AccountNotFound;
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ShopServiceError::EmailTaken,
        _ => ShopServiceError::Internal(anyhow::Error::new(err).context(ctx)),
    }
}

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, ShopServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")?;
        Ok(model.map(account_from_model))
    }

    async fn list(&self) -> Result<Vec<Account>, ShopServiceError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list accounts")?;
        Ok(models.into_iter().map(account_from_model).collect())
    }

    async fn create(&self, account: &Account) -> Result<(), ShopServiceError> {
        users::ActiveModel {
            id: Set(account.id),
            name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            password_digest: Set(account.password_digest.clone()),
            password_salt: Set(account.password_salt.clone()),
            phone_number: Set(account.phone_number.clone()),
            address_name: Set(account.address_name.clone()),
            address: Set(account.address.clone()),
            city: Set(account.city.clone()),
            balance: Set(account.balance),
            is_admin: Set(account.role.is_admin()),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| classify_db_err(e, "create account"))?;
        Ok(())
    }

    async fn update_shipping_address(
        &self,
        id: Uuid,
        address: &ShippingAddress,
    ) -> Result<(), ShopServiceError> {
        users::ActiveModel {
            id: Set(id),
            address_name: Set(Some(address.address_name.clone())),
            phone_number: Set(address.phone_number.clone()),
            address: Set(Some(address.address.clone())),
            city: Set(Some(address.city.clone())),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| classify_db_err(e, "update shipping address"))?;
        Ok(())
    }

    async fn adjust_balance(&self, id: Uuid, delta: i64) -> Result<i64, ShopServiceError> {
        // Row lock serializes concurrent adjustments on the same account;
        // the range check runs under the lock, before anything is written.
        let result = self
            .db
            .transaction::<_, i64, ShopServiceError>(move |txn| {
                Box::pin(async move {
                    let model = users::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await
                        .context("load account for balance update")?
                        .ok_or(ShopServiceError::AccountNotFound)?;
                    let new_balance = apply_delta(model.balance, delta)
                        .ok_or(ShopServiceError::BalanceOutOfRange)?;
                    let mut active = model.into_active_model();
                    active.balance = Set(new_balance);
                    active.updated_at = Set(Utc::now());
                    active
                        .update(txn)
                        .await
                        .context("persist balance update")?;
                    Ok(new_balance)
                })
            })
            .await;
        result.map_err(|e| match e {
            TransactionError::Connection(e) => {
                ShopServiceError::Internal(anyhow::Error::new(e).context("balance transaction"))
            }
            TransactionError::Transaction(e) => e,
        })
    }

    async fn overwrite(&self, id: Uuid, update: &AccountUpdate) -> Result<(), ShopServiceError> {
        users::ActiveModel {
            id: Set(id),
            name: Set(update.name.clone()),
            email: Set(update.email.clone()),
            phone_number: Set(update.phone_number.clone()),
            address_name: Set(update.address_name.clone()),
            address: Set(update.address.clone()),
            city: Set(update.city.clone()),
            balance: Set(update.balance),
            is_admin: Set(update.role.is_admin()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| classify_db_err(e, "overwrite account"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ShopServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete account")?;
        Ok(result.rows_affected > 0)
    }
}

fn account_from_model(model: users::Model) -> Account {
    Account {
        id: model.id,
        name: model.name,
        email: model.email,
        password_digest: model.password_digest,
        password_salt: model.password_salt,
        phone_number: model.phone_number,
        address_name: model.address_name,
        address: model.address,
        city: model.city,
        balance: model.balance,
        role: Role::from_is_admin(model.is_admin),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Sales repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSalesRepository {
    pub db: DatabaseConnection,
}

impl SalesRepository for DbSalesRepository {
    async fn total_finished_quantity(&self) -> Result<i64, ShopServiceError> {
        // SUM over zero rows is NULL, hence the nested Option.
        let total: Option<Option<i64>> = order_items::Entity::find()
            .select_only()
            .column_as(order_items::Column::Quantity.sum(), "total")
            .inner_join(orders::Entity)
            .filter(orders::Column::Status.eq(OrderStatus::Finished.as_str()))
            .into_tuple()
            .one(&self.db)
            .await
            .context("sum finished order quantities")?;
        Ok(total.flatten().unwrap_or(0))
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, ShopServiceError> {
        let models = categories::Entity::find()
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models
            .into_iter()
            .map(|model| Category {
                id: model.id,
                title: model.title,
                created_at: model.created_at,
                updated_at: model.updated_at,
            })
            .collect())
    }
}
