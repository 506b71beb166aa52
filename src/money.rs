//! Integer money amounts.
//!
//! Balances and payment amounts are whole units of a single currency, so a
//! plain `i64` is wrapped to keep amounts from mixing with identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::SubAssign;

/// An amount of money in the smallest currency unit.
///
/// # Examples
///
/// ```
/// use wallet_ledger::Money;
///
/// let amount = Money::new(300);
/// assert!(amount.is_positive());
/// assert_eq!(amount.checked_add(Money::new(1)), Some(Money::new(301)));
/// assert_eq!(Money::new(i64::MAX).checked_add(amount), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Money(0);

    /// Creates an amount from a raw integer value.
    pub const fn new(value: i64) -> Self {
        Money(value)
    }

    /// Returns the raw integer value.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns `true` if this amount is strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Money)
    }
}
