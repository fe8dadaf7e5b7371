//! Money type for representing monthly currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Scoring ratios are computed from the cent values, so conversions
//! to and from fractional dollars round to the nearest cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a fractional dollar value, rounded to the
    /// nearest cent
    ///
    /// Non-finite inputs produce zero; snapshot coercion reports them as
    /// warnings before amounts reach this point.
    pub fn from_dollars(dollars: f64) -> Self {
        if dollars.is_finite() {
            Self((dollars * 100.0).round() as i64)
        } else {
            Self(0)
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as fractional dollars
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a scalar, rounding to the nearest cent
    ///
    /// Used for the flat tax adjustment (`gross × (1 − rate/100)`).
    pub fn mul_scalar(&self, factor: f64) -> Self {
        Self::from_dollars(self.as_dollars() * factor)
    }

    /// Divide by a positive divisor, rounding to the nearest cent
    ///
    /// Divisors that are not greater than zero return the amount unchanged;
    /// frequency normalization treats a missing or zero divisor as "already
    /// monthly".
    pub fn div_scalar(&self, divisor: f64) -> Self {
        if divisor > 0.0 {
            Self::from_dollars(self.as_dollars() / divisor)
        } else {
            *self
        }
    }

    /// Fraction of `total` this amount represents, as a percentage
    ///
    /// Returns 0.0 when `total` is not positive.
    pub fn percent_of(&self, total: Money) -> f64 {
        if total.is_positive() {
            self.as_dollars() / total.as_dollars() * 100.0
        } else {
            0.0
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
