use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::Currency;

/// An amount of one currency with fixed-point semantics.
///
/// Amounts are stored in minor units at four fractional digits, so `10 PLN`
/// is `100_000` minor units. This keeps request amounts like `3.1234` exact
/// where an `f64` would drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor: i64,
    currency: Currency,
}

impl Money {
    /// Minor units per whole currency unit (four fractional digits).
    pub const SCALE: i64 = 10_000;

    /// Currency assumed when a request does not name one.
    pub const DEFAULT_CURRENCY: Currency = Currency::Pln;

    /// An amount of whole currency units.
    pub const fn new(units: i64, currency: Currency) -> Self {
        Self {
            minor: units * Self::SCALE,
            currency,
        }
    }

    pub const fn from_minor(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Convert a decimal amount, rounding to the fourth fractional digit.
    pub fn from_decimal(value: f64, currency: Currency) -> Self {
        Self {
            minor: (value * Self::SCALE as f64).round() as i64,
            currency,
        }
    }

    pub const fn minor(&self) -> i64 {
        self.minor
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Whole-unit part of the amount, truncating fractional digits.
    pub const fn units(&self) -> i64 {
        self.minor / Self::SCALE
    }

    pub const fn is_positive(&self) -> bool {
        self.minor > 0
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minor < 0 { "-" } else { "" };
        let minor = self.minor.abs();
        write!(
            f,
            "{}{}.{:04} {}",
            sign,
            minor / Self::SCALE,
            minor % Self::SCALE,
            self.currency
        )
    }
}
