//! Payment attempt types: access tokens, session requests, and outcomes.
//!
//! These are the values that cross the gateway boundary during a
//! checkout attempt. [`PaymentRequest`] serializes to the exact JSON
//! body the gateway expects, and [`PaymentOutcome`] is the contract
//! returned to the storefront caller.

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CurrencyCode, OrderId, Timestamp};

use super::Order;

/// Short-lived bearer token obtained via the client-credentials grant.
///
/// Tokens are requested fresh for every payment attempt and never
/// cached, so there is no expiry bookkeeping beyond the acquisition
/// time carried for log correlation.
#[derive(Debug, Clone)]
pub struct AuthToken {
    token: SecretString,
    obtained_at: Timestamp,
}

impl AuthToken {
    /// Wraps a raw access token, timestamped at the current moment.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
            obtained_at: Timestamp::now(),
        }
    }

    /// Exposes the raw token for the Authorization header.
    pub fn expose(&self) -> &str {
        self.token.expose_secret()
    }

    /// When this token was obtained.
    pub fn obtained_at(&self) -> Timestamp {
        self.obtained_at
    }
}

/// Checkout session request sent to the gateway.
///
/// Field order matches the gateway contract. `amount` serializes as a
/// JSON number and `order_id` as the bare numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub order_id: OrderId,
    pub return_url: String,
    pub cancel_url: String,
    pub customer_email: String,
    pub customer_name: String,
}

impl PaymentRequest {
    /// Builds a session request from an order.
    pub fn from_order(order: &Order) -> Self {
        Self {
            amount: order.total.amount(),
            currency: order.total.currency().clone(),
            order_id: order.id,
            return_url: order.return_url.clone(),
            cancel_url: order.cancel_url.clone(),
            customer_email: order.customer_email.clone(),
            customer_name: order.customer_name.clone(),
        }
    }
}

/// Result of asking the gateway for a hosted checkout session.
///
/// A `Failure` is a well-formed gateway refusal (declined, rejected
/// request, non-2xx status). Transport and parse faults surface as
/// [`GatewayError`] instead.
///
/// [`GatewayError`]: super::GatewayError
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentSessionResult {
    /// Session established; redirect the customer here.
    Success { checkout_url: String },

    /// The gateway refused to open a session.
    Failure { reason: String },
}

/// Boundary result flag for a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutResult {
    Success,
    Fail,
}

/// Outcome contract returned to the storefront checkout caller.
///
/// Serializes as `{"result":"success","redirect":"<url>"}` on success
/// and `{"result":"fail","redirect":""}` on failure. This shape is
/// stable: callers branch on `result` and follow `redirect` blindly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// Whether a checkout session was established.
    pub result: CheckoutResult,

    /// Hosted checkout URL, or empty on failure.
    pub redirect: String,
}

impl PaymentOutcome {
    /// Successful outcome redirecting to the hosted checkout page.
    pub fn success(redirect: impl Into<String>) -> Self {
        Self {
            result: CheckoutResult::Success,
            redirect: redirect.into(),
        }
    }

    /// Failed outcome with the mandated empty redirect.
    pub fn fail() -> Self {
        Self {
            result: CheckoutResult::Fail,
            redirect: String::new(),
        }
    }

    /// Returns true for a success outcome.
    pub fn is_success(&self) -> bool {
        self.result == CheckoutResult::Success
    }
}
