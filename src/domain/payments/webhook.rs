//! Gateway webhook notification types.
//!
//! Defines the structures for parsing gateway notification payloads.
//! Only fields relevant to reconciliation are captured; unknown
//! fields are ignored.

use serde::Deserialize;

use crate::domain::foundation::OrderId;

use super::ReconciliationError;

/// Wire shape of a gateway notification body.
#[derive(Debug, Deserialize)]
struct RawNotification {
    order_id: u64,
    status: String,
}

/// Payment status reported by the gateway.
///
/// Matching against the wire value is case sensitive: the gateway
/// contract specifies lowercase status strings, and anything else is
/// carried as [`Unrecognized`] rather than coerced.
///
/// [`Unrecognized`]: NotificationStatus::Unrecognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    /// Payment settled successfully.
    Completed,
    /// Payment failed at the gateway.
    Failed,
    /// Any other status value, preserved verbatim for logging.
    Unrecognized(String),
}

impl NotificationStatus {
    /// Parse a status from its wire representation.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unrecognized(s) => s,
        }
    }
}

/// A parsed payment notification from the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookNotification {
    /// Order the notification refers to.
    pub order_id: OrderId,

    /// Reported payment status.
    pub status: NotificationStatus,
}

impl WebhookNotification {
    /// Parses a raw webhook body into a notification.
    ///
    /// # Errors
    ///
    /// Returns [`ReconciliationError::MalformedPayload`] if the body is
    /// not JSON or lacks the `order_id`/`status` fields.
    pub fn parse(payload: &[u8]) -> Result<Self, ReconciliationError> {
        let raw: RawNotification = serde_json::from_slice(payload)
            .map_err(|e| ReconciliationError::MalformedPayload(e.to_string()))?;

        Ok(Self {
            order_id: OrderId::new(raw.order_id),
            status: NotificationStatus::from_wire(&raw.status),
        })
    }
}
