//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are always in US dollars; the marketplace has a single currency.

use core::fmt;
use std::iter::Sum;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price is not a valid number: {0}")]
    Invalid(String),
    /// The amount is zero or negative.
    #[error("price must be greater than zero")]
    NotPositive,
}

/// A price in US dollars.
///
/// Serialized as a decimal string (e.g. `"29.99"`) so no precision is lost in
/// the stored JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Parse a strictly positive price from user input.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Invalid` if the input is not a number, or
    /// `PriceError::NotPositive` if it is zero or negative.
    pub fn parse_positive(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(Price::parse_positive("29.99").unwrap(), Price::from_cents(2999));
        assert_eq!(Price::parse_positive(" 5 ").unwrap(), Price::from_cents(500));
    }

    #[test]
    fn test_parse_exponent_form() {
        let expected = Price::parse_positive("1000000000000000000000").unwrap();
        assert_eq!(Price::parse_positive("1e21").unwrap(), expected);
        assert_eq!(Price::parse_positive("2.5E-1").unwrap(), Price::from_cents(25));
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert_eq!(Price::parse_positive("0"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse_positive("-1.50"), Err(PriceError::NotPositive));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Price::parse_positive("free"),
            Err(PriceError::Invalid(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(2999).to_string(), "$29.99");
        assert_eq!(Price::from_cents(500).to_string(), "$5.00");
    }

    #[test]
    fn test_sum() {
        let prices = [Price::from_cents(2999), Price::from_cents(1001)];
        assert_eq!(prices.iter().sum::<Price>(), Price::from_cents(4000));
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_cents(2999)).unwrap();
        assert_eq!(json, "\"29.99\"");
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Price::from_cents(2999));
    }
}
