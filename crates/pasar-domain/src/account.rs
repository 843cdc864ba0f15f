//! Account roles and capabilities.

use serde::{Deserialize, Serialize};

/// Something a caller is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Read,
    Write,
    Admin,
}

/// Account role.
///
/// Stored as the `is_admin` flag; authorization goes through [`Role::can`]
/// so call sites never compare the flag directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub fn from_is_admin(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::Customer }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The capability set granted by this role. Admin is a strict superset.
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::Customer => &[Capability::Read, Capability::Write],
            Self::Admin => &[Capability::Read, Capability::Write, Capability::Admin],
        }
    }

    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}
