//! Error types for the wallet ledger.

use crate::account::{AccountId, Phone};
use crate::favorite::FavoriteId;
use crate::money::Money;
use crate::payment::PaymentId;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur during ledger operation.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// No account with the given identifier
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// No payment with the given identifier
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// No favorite with the given identifier
    #[error("Favorite not found: {0}")]
    FavoriteNotFound(FavoriteId),

    /// The payment has already been saved as a favorite
    #[error("Payment {0} already added to favorites")]
    FavoriteAdded(PaymentId),

    /// Payments and deposits must move a positive amount
    #[error("Amount must be greater than 0, got {0}")]
    AmountMustBePositive(Money),

    /// Another account already uses this phone number
    #[error("Phone already registered: {0}")]
    PhoneRegistered(Phone),

    /// The account cannot cover the payment
    #[error("Not enough balance in account {account}: balance {balance}, required {required}")]
    NotEnoughBalance {
        account: AccountId,
        balance: Money,
        required: Money,
    },

    /// Crediting the account would overflow its balance
    #[error("Balance overflow in account {account}: balance {balance}, credit {amount}")]
    BalanceOverflow {
        account: AccountId,
        balance: Money,
        amount: Money,
    },

    /// Every account identifier has been handed out
    #[error("No account identifiers left to assign")]
    AccountIdsExhausted,

    /// Failed to create, open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed snapshot record
    #[error("Invalid snapshot record {record}: {message}")]
    InvalidRecord { record: usize, message: String },

    /// Missing snapshot file argument
    #[error("Missing snapshot file argument. Usage: wallet-ledger <snapshot>")]
    MissingArgument,
}
