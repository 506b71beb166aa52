//! Account model and balance operations.
//!
//! Maintains the invariant: `balance >= 0` at all times.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Service-assigned account identifier.
pub type AccountId = i64;

/// A phone number, unique across registered accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phone {
    fn from(phone: &str) -> Self {
        Phone(phone.to_string())
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A balance-holding account.
///
/// Field order is also the snapshot field order: `id`, `phone`, `balance`.
///
/// # Invariants
///
/// - `balance` never goes negative: `withdraw` refuses to overdraw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier assigned by the service at registration.
    pub id: AccountId,

    /// Phone number the account was registered with.
    pub phone: Phone,

    /// Current balance.
    pub balance: Money,
}

impl Account {
    /// Creates an account with the given balance.
    pub fn new(id: AccountId, phone: Phone, balance: Money) -> Self {
        Account { id, phone, balance }
    }

    /// Credits the account.
    ///
    /// Returns `false` and leaves the balance untouched if the new balance
    /// would overflow.
    pub fn deposit(&mut self, amount: Money) -> bool {
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Debits the account.
    ///
    /// Returns `false` and leaves the balance untouched if `balance < amount`.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        if self.balance < amount {
            return false;
        }

        self.balance -= amount;
        true
    }
}
