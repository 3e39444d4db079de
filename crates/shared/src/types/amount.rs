//! Journal amount type with decimal precision.
//!
//! CRITICAL: Never use floating-point for amounts.
//! This type wraps `rust_decimal::Decimal` and is always strictly positive.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a raw value cannot become an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The text is not a decimal number.
    #[error("Amount is not a number: {0}")]
    NotANumber(String),

    /// Zero or negative.
    #[error("Amount must be positive, got {0}")]
    NotPositive(Decimal),
}

/// A strictly positive journal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns `AmountError::NotPositive` if `value <= 0`.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Returns the decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses plain (`"12.50"`) or scientific (`"1.25e1"`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| AmountError::NotANumber(raw.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
