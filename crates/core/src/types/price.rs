//! Type-safe price representation using decimal arithmetic.
//!
//! The backend stores prices as `NUMERIC` columns but sends them as plain
//! JSON numbers, so [`Price`] (de)serializes through `f64` while keeping
//! `Decimal` arithmetic on this side of the wire.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in Mexican pesos (MXN), the only currency the catalog uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// ISO 4217 currency code for every catalog price.
    pub const CURRENCY_CODE: &'static str = "MXN";

    /// Zero pesos.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an integer number of centavos.
    #[must_use]
    pub fn from_centavos(centavos: i64) -> Self {
        Self(Decimal::new(centavos, 2))
    }

    /// Get the amount in pesos.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2} {}", self.0, Self::CURRENCY_CODE)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_json_number() {
        let price: Price = serde_json::from_str("125.5").unwrap();
        assert_eq!(price, Price::from_centavos(12_550));

        let whole: Price = serde_json::from_str("0").unwrap();
        assert_eq!(whole, Price::ZERO);
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_value(Price::from_centavos(999)).unwrap();
        assert!(json.is_number());
        assert!((json.as_f64().unwrap() - 9.99).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_centavos(123_450).to_string(), "$1234.50 MXN");
        assert_eq!(Price::ZERO.to_string(), "$0.00 MXN");
    }
}
