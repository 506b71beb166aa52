//! Payment models.

use crate::account::AccountId;
use crate::money::Money;
use std::fmt;
use uuid::Uuid;

/// Globally unique payment identifier.
pub type PaymentId = Uuid;

/// Opaque payment category tag, e.g. `"food"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentCategory(String);

impl PaymentCategory {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PaymentCategory {
    fn from(category: &str) -> Self {
        PaymentCategory(category.to_string())
    }
}

impl fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a payment.
///
/// A payment starts `InProgress` and only ever moves to `Fail` (via reject).
/// There is no completed state: a payment that is never rejected stays
/// `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Debited from the account and not rejected.
    InProgress,

    /// Rejected; the amount was credited back.
    Fail,
}

/// A single debit against an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Globally unique payment ID
    pub id: PaymentId,

    /// Account the amount was debited from
    pub account_id: AccountId,

    /// Debited amount (always positive)
    pub amount: Money,

    /// Category tag
    pub category: PaymentCategory,

    /// Lifecycle status
    pub status: PaymentStatus,
}

impl Payment {
    /// Creates an in-progress payment with a freshly generated ID.
    pub fn new(account_id: AccountId, amount: Money, category: PaymentCategory) -> Self {
        Payment {
            id: Uuid::new_v4(),
            account_id,
            amount,
            category,
            status: PaymentStatus::InProgress,
        }
    }

    /// Marks the payment as failed.
    pub fn reject(&mut self) {
        self.status = PaymentStatus::Fail;
    }

    pub fn is_rejected(&self) -> bool {
        self.status == PaymentStatus::Fail
    }
}
