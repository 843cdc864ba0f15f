//! Caller classification.
//!
//! Every operation declares its minimum classification by going through one
//! of these methods before touching anything else. The account record in the
//! store is authoritative for the caller's role; the gateway header only
//! carries the id.

use pasar_core::identity::Identity;
use pasar_domain::account::Capability;

use crate::domain::repository::AccountRepository;
use crate::domain::types::Account;
use crate::error::ShopServiceError;

pub struct CallerGate<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> CallerGate<R> {
    /// Resolve the caller's account or fail with `Unauthorized`.
    ///
    /// Admits any existing account; admin is a superset of user.
    pub async fn require_user(&self, identity: &Identity) -> Result<Account, ShopServiceError> {
        self.repo
            .find_by_id(identity.user_id)
            .await?
            .ok_or(ShopServiceError::Unauthorized)
    }

    /// Resolve the caller's account and require the `Admin` capability.
    pub async fn require_admin(&self, identity: &Identity) -> Result<Account, ShopServiceError> {
        let account = self.require_user(identity).await?;
        if !account.role.can(Capability::Admin) {
            return Err(ShopServiceError::Forbidden);
        }
        Ok(account)
    }
}
