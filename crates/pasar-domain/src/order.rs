//! Order lifecycle states.

use serde::{Deserialize, Serialize};

/// Order status as stored in the `orders.status` column.
///
/// `Finished` is terminal; only line items of finished orders count toward
/// sales totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Finished,
}

impl OrderStatus {
    /// Convert from the stored string. Returns `None` for unknown values.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }

    /// The stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Finished => "finished",
        }
    }
}
