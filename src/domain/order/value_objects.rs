use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::OrderForm;
use crate::serde_helpers::{lenient_amount, null_as_default};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// Colour family of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Info,
    Success,
    Danger,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Completed => StatusTone::Success,
            OrderStatus::Processing => StatusTone::Info,
            OrderStatus::Cancelled => StatusTone::Danger,
            OrderStatus::Pending => StatusTone::Warning,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCustomer {
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub email: String,
    pub business_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderProductRef {
    pub name: String,
    pub image: String,
}

/// A placed order as the admin endpoints return it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub details: OrderForm,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_amount::deserialize")]
    pub calculated_price: Option<Decimal>,
    #[serde(default)]
    pub cover_type: Option<String>,
    #[serde(default)]
    pub user: Option<OrderCustomer>,
    #[serde(default)]
    pub product: Option<OrderProductRef>,
}

/// Body of `PUT /orders/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

impl AdminOrder {
    /// Request moving the order to `status`; picking the current status is a no-op error
    pub fn request_status(&self, status: OrderStatus) -> Result<StatusUpdate, OrderError> {
        if status == self.status {
            return Err(OrderError::StatusUnchanged(status));
        }
        Ok(StatusUpdate { status })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
