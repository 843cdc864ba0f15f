use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pasar_core::identity::Identity;
use pasar_domain::account::Role;

use crate::domain::types::{Account, AccountUpdate};
use crate::error::ShopServiceError;
use crate::state::AppState;
use crate::usecase::account::{
    AdjustBalanceUseCase, AdminUpdateAccountUseCase, CreateAccountInput, CreateAccountUseCase,
    DeleteAccountUseCase, GetAccountUseCase, ListAccountsUseCase, UpdateShippingAddressInput,
    UpdateShippingAddressUseCase,
};
use crate::usecase::gate::CallerGate;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub balance: i64,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            name: account.name,
            email: account.email,
            phone_number: account.phone_number,
            address_name: account.address_name,
            address: account.address,
            city: account.city,
            balance: account.balance,
        }
    }
}

#[derive(Serialize)]
pub struct ShippingAddressResponse {
    pub id: String,
    pub address_name: Option<String>,
    pub phone_number: String,
    pub address: Option<String>,
    pub city: Option<String>,
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub id: String,
    pub balance: i64,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn get_user(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    let account = gate.require_user(&identity).await?;
    Ok(Json(account.into()))
}

// ── GET /users/shipping_address ──────────────────────────────────────────────

pub async fn get_shipping_address(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ShippingAddressResponse>, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    let account = gate.require_user(&identity).await?;
    Ok(Json(ShippingAddressResponse {
        id: account.id.to_string(),
        address_name: account.address_name,
        phone_number: account.phone_number,
        address: account.address,
        city: account.city,
    }))
}

// ── PUT /users/shipping_address ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PutShippingAddressRequest {
    pub address_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
}

pub async fn put_shipping_address(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<PutShippingAddressRequest>,
) -> Result<Json<MessageResponse>, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    let caller = gate.require_user(&identity).await?;
    let usecase = UpdateShippingAddressUseCase {
        repo: state.account_repo(),
    };
    usecase
        .execute(
            caller.id,
            UpdateShippingAddressInput {
                address_name: body.address_name,
                phone_number: body.phone_number,
                address: body.address,
                city: body.city,
            },
        )
        .await?;
    tracing::info!(email = %caller.email, "shipping address updated");
    Ok(Json(MessageResponse {
        message: "Shipping address updated".into(),
    }))
}

// ── GET /users/balance ───────────────────────────────────────────────────────

pub async fn get_balance(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<BalanceResponse>, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    let account = gate.require_user(&identity).await?;
    Ok(Json(BalanceResponse {
        id: account.id.to_string(),
        balance: account.balance,
    }))
}

// ── PUT /users/balance ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PutBalanceRequest {
    /// Signed delta applied to the stored balance, not an absolute value.
    pub balance: i64,
}

pub async fn put_balance(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<PutBalanceRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    let caller = gate.require_user(&identity).await?;
    let usecase = AdjustBalanceUseCase {
        repo: state.account_repo(),
    };
    let new_balance = usecase.execute(caller.id, body.balance).await?;
    tracing::info!(email = %caller.email, "balance updated");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Your balance has been updated, current_balance:{new_balance}"),
        }),
    ))
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    #[serde(default)]
    pub is_admin: bool,
}

pub async fn create_user(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<StatusCode, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    gate.require_admin(&identity).await?;
    let usecase = CreateAccountUseCase {
        repo: state.account_repo(),
    };
    usecase
        .execute(CreateAccountInput {
            name: body.name,
            email: body.email,
            password: body.password,
            phone_number: body.phone_number,
            is_admin: body.is_admin,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

// ── GET /users/all ───────────────────────────────────────────────────────────

pub async fn get_all_users(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    gate.require_admin(&identity).await?;
    let usecase = ListAccountsUseCase {
        repo: state.account_repo(),
    };
    let accounts = usecase.execute().await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user_by_id(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountResponse>, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    gate.require_admin(&identity).await?;
    let usecase = GetAccountUseCase {
        repo: state.account_repo(),
    };
    let account = usecase.execute(id).await?;
    Ok(Json(account.into()))
}

// ── PUT /users/{id} ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AdminUpdateUserRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub balance: i64,
    #[serde(default)]
    pub is_admin: bool,
}

pub async fn admin_update_user(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AdminUpdateUserRequest>,
) -> Result<StatusCode, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    let admin = gate.require_admin(&identity).await?;
    let usecase = AdminUpdateAccountUseCase {
        repo: state.account_repo(),
    };
    usecase
        .execute(
            id,
            AccountUpdate {
                name: body.name,
                email: body.email,
                phone_number: body.phone_number,
                address_name: body.address_name,
                address: body.address,
                city: body.city,
                balance: body.balance,
                role: Role::from_is_admin(body.is_admin),
            },
        )
        .await?;
    tracing::info!(target_id = %id, admin = %admin.email, "account overwritten");
    Ok(StatusCode::OK)
}

// ── DELETE /users ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteUserRequest {
    pub id: Uuid,
}

pub async fn delete_user(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<DeleteUserRequest>,
) -> Result<StatusCode, ShopServiceError> {
    let gate = CallerGate {
        repo: state.account_repo(),
    };
    let admin = gate.require_admin(&identity).await?;
    let usecase = DeleteAccountUseCase {
        repo: state.account_repo(),
    };
    usecase.execute(&admin, body.id).await?;
    tracing::info!(target_id = %body.id, admin = %admin.email, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
