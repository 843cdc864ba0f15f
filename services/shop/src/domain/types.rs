use chrono::{DateTime, Utc};
use uuid::Uuid;

use pasar_domain::account::Role;

/// Account owned by the shop service.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub password_salt: String,
    pub phone_number: String,
    pub address_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub balance: i64,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The four shipping fields, all present and non-empty once validated.
#[derive(Debug, Clone)]
pub struct ShippingAddress {
    pub address_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
}

/// Full overwrite of an account's mutable fields, applied by admins.
#[derive(Debug, Clone)]
pub struct AccountUpdate {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub balance: i64,
    pub role: Role,
}

/// Product category.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
