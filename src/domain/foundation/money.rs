//! Monetary value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// ISO 4217 style three letter currency code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a CurrencyCode, returning error unless the input is
    /// exactly three ASCII letters. Input is uppercased.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::empty_field("currency"));
        }
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                "must be exactly 3 ASCII letters",
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative monetary amount in a specific currency.
///
/// Amounts are normalized to two decimal places on construction so
/// order totals compare cleanly regardless of input scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a Money value, returning error if the amount is negative.
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::invalid_format(
                "amount",
                "cannot be negative",
            ));
        }
        Ok(Self {
            amount: amount.round_dp(2),
            currency,
        })
    }

    /// Returns the normalized amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usd() -> CurrencyCode {
        CurrencyCode::new("USD").unwrap()
    }

    #[test]
    fn currency_code_accepts_three_letters() {
        let code = CurrencyCode::new("EUR").unwrap();
        assert_eq!(code.as_str(), "EUR");
    }

    #[test]
    fn currency_code_uppercases_input() {
        let code = CurrencyCode::new("usd").unwrap();
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn currency_code_rejects_empty_string() {
        let result = CurrencyCode::new("");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn currency_code_rejects_wrong_length() {
        assert!(CurrencyCode::new("US").is_err());
        assert!(CurrencyCode::new("USDT").is_err());
    }

    #[test]
    fn currency_code_rejects_non_letters() {
        assert!(CurrencyCode::new("U5D").is_err());
        assert!(CurrencyCode::new("U-D").is_err());
    }

    #[test]
    fn money_accepts_positive_amount() {
        let money = Money::new("49.99".parse().unwrap(), usd()).unwrap();
        assert_eq!(money.amount(), "49.99".parse::<Decimal>().unwrap());
        assert_eq!(money.currency().as_str(), "USD");
    }

    #[test]
    fn money_accepts_zero_amount() {
        let money = Money::new(Decimal::ZERO, usd()).unwrap();
        assert!(money.amount().is_zero());
    }

    #[test]
    fn money_rejects_negative_amount() {
        let result = Money::new("-1.00".parse().unwrap(), usd());
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn money_normalizes_to_two_decimal_places() {
        let money = Money::new("49.9900".parse().unwrap(), usd()).unwrap();
        assert_eq!(money.amount().to_string(), "49.99");

        let money = Money::new("10".parse().unwrap(), usd()).unwrap();
        assert_eq!(money.amount(), "10".parse::<Decimal>().unwrap());
    }

    #[test]
    fn money_displays_amount_and_currency() {
        let money = Money::new("49.99".parse().unwrap(), usd()).unwrap();
        assert_eq!(format!("{}", money), "49.99 USD");
    }

    #[test]
    fn money_amount_serializes_as_json_number() {
        let money = Money::new("49.99".parse().unwrap(), usd()).unwrap();
        let value = serde_json::to_value(&money).unwrap();
        assert_eq!(value["amount"], json!(49.99));
        assert_eq!(value["currency"], json!("USD"));
    }
}
