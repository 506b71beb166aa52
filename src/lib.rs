//! # Wallet Ledger
//!
//! An in-memory ledger of accounts, payments made against those accounts,
//! and favorite payment templates, with flat-file account snapshots.
//!
//! ## Design Principles
//!
//! - **Single owner**: the [`Service`] owns every account, payment and favorite
//! - **Non-negative balances**: payments are refused when the account cannot cover them
//! - **Frozen favorites**: a favorite copies its payment's amount and category
//! - **Additive, atomic import**: a snapshot is decoded in full before any account is appended
//!
//! ## Example
//!
//! ```
//! use wallet_ledger::{Money, PaymentCategory, Phone, Service};
//!
//! let mut service = Service::new();
//! let id = service.register_account(Phone::from("911")).unwrap().id;
//! service.deposit(id, Money::new(1000)).unwrap();
//! service.pay(id, Money::new(300), PaymentCategory::from("food")).unwrap();
//!
//! let mut snapshot = Vec::new();
//! service.export_to_writer(&mut snapshot).unwrap();
//! assert_eq!(snapshot, b"1;911;700|");
//! ```

pub mod account;
pub mod error;
pub mod favorite;
pub mod money;
pub mod payment;
pub mod service;
pub mod snapshot;

pub use account::{Account, AccountId, Phone};
pub use error::{LedgerError, Result};
pub use favorite::{Favorite, FavoriteId};
pub use money::Money;
pub use payment::{Payment, PaymentCategory, PaymentId, PaymentStatus};
pub use service::Service;
