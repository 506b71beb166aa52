//! The ledger service.
//!
//! Owns every account, payment and favorite, and is the only place balances
//! change. All operations run synchronously against the owned collections.

use crate::account::{Account, AccountId, Phone};
use crate::error::{LedgerError, Result};
use crate::favorite::{Favorite, FavoriteId};
use crate::money::Money;
use crate::payment::{Payment, PaymentCategory, PaymentId};
use crate::snapshot;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// In-memory ledger of accounts, payments and favorites.
///
/// Collections keep insertion order. Accounts imported from a snapshot are
/// appended as-is, so the account collection may hold repeated identifiers;
/// lookups resolve those to the most recently appended account.
#[derive(Debug, Default)]
pub struct Service {
    /// Last identifier handed out by `register_account`.
    next_account_id: AccountId,

    accounts: Vec<Account>,

    payments: Vec<Payment>,

    favorites: Vec<Favorite>,
}

impl Service {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account with zero balance.
    pub fn register_account(&mut self, phone: Phone) -> Result<&Account> {
        if self.accounts.iter().any(|a| a.phone == phone) {
            return Err(LedgerError::PhoneRegistered(phone));
        }

        let id = self
            .next_account_id
            .checked_add(1)
            .ok_or(LedgerError::AccountIdsExhausted)?;
        self.next_account_id = id;
        let account = Account::new(id, phone, Money::ZERO);
        debug!("Registered account {} for {}", account.id, account.phone);
        self.accounts.push(account);

        // Safety: the account was just appended
        Ok(self.accounts.last().expect("account just appended"))
    }

    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account> {
        self.accounts
            .iter()
            .rev()
            .find(|a| a.id == account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))
    }

    pub fn find_account_by_id_mut(&mut self, account_id: AccountId) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .rev()
            .find(|a| a.id == account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))
    }

    pub fn find_payment_by_id(&self, payment_id: PaymentId) -> Result<&Payment> {
        self.payments
            .iter()
            .find(|p| p.id == payment_id)
            .ok_or(LedgerError::PaymentNotFound(payment_id))
    }

    fn find_payment_by_id_mut(&mut self, payment_id: PaymentId) -> Result<&mut Payment> {
        self.payments
            .iter_mut()
            .find(|p| p.id == payment_id)
            .ok_or(LedgerError::PaymentNotFound(payment_id))
    }

    pub fn find_favorite_by_id(&self, favorite_id: FavoriteId) -> Result<&Favorite> {
        self.favorites
            .iter()
            .find(|f| f.id == favorite_id)
            .ok_or(LedgerError::FavoriteNotFound(favorite_id))
    }

    /// All accounts in collection order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All payments in creation order.
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// All favorites in creation order.
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Credits an account.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            return Err(LedgerError::AmountMustBePositive(amount));
        }

        let account = self.find_account_by_id_mut(account_id)?;
        if !account.deposit(amount) {
            return Err(LedgerError::BalanceOverflow {
                account: account_id,
                balance: account.balance,
                amount,
            });
        }
        debug!("Deposited {} to account {}", amount, account_id);

        Ok(())
    }

    /// Debits an account and records an in-progress payment.
    ///
    /// Fails without touching the balance if the amount is not positive or
    /// the account cannot cover it.
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: PaymentCategory,
    ) -> Result<&Payment> {
        if !amount.is_positive() {
            return Err(LedgerError::AmountMustBePositive(amount));
        }

        let account = self.find_account_by_id_mut(account_id)?;
        if !account.withdraw(amount) {
            return Err(LedgerError::NotEnoughBalance {
                account: account_id,
                balance: account.balance,
                required: amount,
            });
        }

        let payment = Payment::new(account_id, amount, category);
        debug!(
            "Payment {}: debited {} from account {} ({})",
            payment.id, amount, account_id, payment.category
        );
        self.payments.push(payment);

        // Safety: the payment was just appended
        Ok(self.payments.last().expect("payment just appended"))
    }

    /// Marks a payment as failed and credits its amount back to the account.
    ///
    /// Rejecting an already failed payment credits the account again. If the
    /// credit would overflow the balance, neither the payment nor the account
    /// changes.
    pub fn reject(&mut self, payment_id: PaymentId) -> Result<()> {
        let payment = self.find_payment_by_id(payment_id)?;
        if payment.is_rejected() {
            warn!("Payment {} is already rejected, crediting again", payment_id);
        }
        let (account_id, amount) = (payment.account_id, payment.amount);

        let account = self.find_account_by_id_mut(account_id)?;
        if !account.deposit(amount) {
            return Err(LedgerError::BalanceOverflow {
                account: account_id,
                balance: account.balance,
                amount,
            });
        }

        self.find_payment_by_id_mut(payment_id)?.reject();
        debug!(
            "Payment {}: rejected, credited {} to account {}",
            payment_id, amount, account_id
        );

        Ok(())
    }

    /// Issues a new payment with the same account, amount and category.
    pub fn repeat(&mut self, payment_id: PaymentId) -> Result<&Payment> {
        let payment = self.find_payment_by_id(payment_id)?;
        let (account_id, amount, category) =
            (payment.account_id, payment.amount, payment.category.clone());

        self.pay(account_id, amount, category)
    }

    /// Saves a payment as a named favorite.
    ///
    /// Each payment can be favorited once; the favorite keeps a copy of the
    /// payment's account, amount and category.
    pub fn favorite_payment(&mut self, payment_id: PaymentId, name: &str) -> Result<&Favorite> {
        let payment = self.find_payment_by_id(payment_id)?;

        if self.favorites.iter().any(|f| f.payment_id == payment_id) {
            return Err(LedgerError::FavoriteAdded(payment_id));
        }

        let favorite = Favorite::from_payment(payment, name);
        debug!(
            "Favorite {}: '{}' from payment {}",
            favorite.id, favorite.name, payment_id
        );
        self.favorites.push(favorite);

        // Safety: the favorite was just appended
        Ok(self.favorites.last().expect("favorite just appended"))
    }

    /// Issues a new payment from a favorite's template.
    pub fn pay_from_favorite(&mut self, favorite_id: FavoriteId) -> Result<&Payment> {
        let favorite = self.find_favorite_by_id(favorite_id)?;
        let (account_id, amount, category) =
            (favorite.account_id, favorite.amount, favorite.category.clone());

        self.pay(account_id, amount, category)
    }

    /// Writes a snapshot of every account to `writer`.
    ///
    /// Returns the number of accounts written.
    pub fn export_to_writer<W: Write>(&self, writer: W) -> Result<usize> {
        snapshot::write_snapshot(writer, &self.accounts)
    }

    /// Decodes a snapshot from `reader` and appends its accounts.
    ///
    /// Import is additive: accounts are appended even if their identifiers or
    /// phones already exist. A malformed record aborts the import before any
    /// account is appended. Returns the number of accounts imported.
    pub fn import_from_reader<R: Read>(&mut self, reader: R) -> Result<usize> {
        let imported = snapshot::read_snapshot(reader)?;
        let count = imported.len();

        if let Some(max_id) = imported.iter().map(|a| a.id).max() {
            self.next_account_id = self.next_account_id.max(max_id);
        }
        self.accounts.extend(imported);

        Ok(count)
    }

    /// Writes a snapshot of every account to the file at `path`, replacing
    /// any existing content.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        let count = self.export_to_writer(&mut file)?;

        if let Err(e) = file.sync_all() {
            warn!("Failed to sync snapshot {}: {}", path.display(), e);
        }

        info!("Exported {} accounts to {}", count, path.display());
        Ok(())
    }

    /// Appends the accounts stored in the snapshot file at `path`.
    pub fn import_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let count = self.import_from_reader(BufReader::new(file))?;

        info!("Imported {} accounts from {}", count, path.display());
        Ok(())
    }

    /// Writes every account as CSV with an `id,phone,balance` header.
    pub fn write_accounts<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for account in &self.accounts {
            csv_writer.serialize(account)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
