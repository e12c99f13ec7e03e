//! Stock change and audit log types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::component::Component;

/// An append-only audit record of a signed quantity change.
///
/// Created by the backend as a side effect of a stock change; never edited
/// or deleted by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLog {
    pub id: i64,
    pub component_id: i64,
    /// Embedded component, present on the global history listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
    /// Positive for inbound, negative for outbound.
    pub change_amount: i64,
    #[serde(default)]
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl StockLog {
    pub const fn direction(&self) -> StockDirection {
        if self.change_amount < 0 {
            StockDirection::Out
        } else {
            StockDirection::In
        }
    }
}

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockDirection {
    #[default]
    In,
    Out,
}

impl std::fmt::Display for StockDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Out => write!(f, "out"),
        }
    }
}

/// Request body for `POST /components/{id}/stock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    /// Signed delta applied to the component's stock.
    pub amount: i64,
    #[serde(default)]
    pub reason: String,
}

impl StockChange {
    /// Build a signed change from a direction and an unsigned amount.
    pub fn new(direction: StockDirection, amount: u32, reason: impl Into<String>) -> Self {
        let amount = i64::from(amount);
        Self {
            amount: match direction {
                StockDirection::In => amount,
                StockDirection::Out => -amount,
            },
            reason: reason.into(),
        }
    }
}
