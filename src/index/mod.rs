//! Authoritative set of accounts with three access paths: ordered by account number, by
//! account number and by username.
//!
//! Records live in the by-number map. The ordered tree and the username map hold account numbers
//! that resolve into it, so every view always points at the same record.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    account::{Account, CustomerAcc},
    config::DEFAULT_FIRST_ACCOUNT_NUMBER,
    errors::BankErr,
    AccountNumber,
};

pub(crate) mod tree;

use tree::AccountTree;

/// Ordered tree plus two lookup maps over all accounts
#[derive(Debug)]
pub struct AccountIndex {
    ordered: AccountTree,
    by_number: HashMap<AccountNumber, CustomerAcc>,
    by_username: HashMap<String, AccountNumber>,
    /// `None` once the number space is used up
    next_number: Option<AccountNumber>,
}

impl Default for AccountIndex {
    fn default() -> Self {
        Self::starting_at(DEFAULT_FIRST_ACCOUNT_NUMBER)
    }
}

impl AccountIndex {
    /// Empty index that hands out account numbers from `first_number` upwards
    pub fn starting_at(first_number: AccountNumber) -> Self {
        Self {
            ordered: AccountTree::default(),
            by_number: HashMap::new(),
            by_username: HashMap::new(),
            next_number: Some(first_number),
        }
    }

    /// Number the next account will get. Only a successful [`insert`](Self::insert) moves it on,
    /// so numbers are never handed out twice, even after removal.
    pub fn next_number(&self) -> Result<AccountNumber, BankErr> {
        self.next_number.ok_or(BankErr::AccountNumbersExhausted)
    }

    /// Insert `account` into all views and move the number counter past its number.
    ///
    /// Nothing changes when account number or username is already present.
    pub fn insert(&mut self, account: CustomerAcc) -> Result<(), BankErr> {
        let number = account.account_number();
        if self.by_username.contains_key(account.username()) {
            return Err(BankErr::UsernameTaken(account.username().to_owned()));
        }
        if self.by_number.contains_key(&number) || !self.ordered.insert(number) {
            // only possible when account number counter was misconfigured
            return Err(BankErr::AccountNumberTaken(number));
        }

        self.by_username.insert(account.username().to_owned(), number);
        self.by_number.insert(number, account);
        if self.next_number.is_some_and(|next| number >= next) {
            self.next_number = number.checked_add(1);
        }
        debug_assert_eq!(self.ordered.len(), self.by_number.len());
        debug!(account = number, "account indexed");
        Ok(())
    }

    /// Account with `number`
    pub fn find_by_number(&self, number: AccountNumber) -> Result<&CustomerAcc, BankErr> {
        self.by_number
            .get(&number)
            .ok_or(BankErr::AccountNotFound(number))
    }

    /// Mutable account with `number`
    pub fn find_by_number_mut(
        &mut self,
        number: AccountNumber,
    ) -> Result<&mut CustomerAcc, BankErr> {
        self.by_number
            .get_mut(&number)
            .ok_or(BankErr::AccountNotFound(number))
    }

    /// Account owned by `username`
    pub fn find_by_username(&self, username: &str) -> Option<&CustomerAcc> {
        self.by_username
            .get(username)
            .and_then(|number| self.by_number.get(number))
    }

    /// Is `username` already used by some account
    pub fn username_taken(&self, username: &str) -> bool {
        self.by_username.contains_key(username)
    }

    /// Remove account from all views and hand it back
    pub fn remove(&mut self, number: AccountNumber) -> Result<CustomerAcc, BankErr> {
        let account = self
            .by_number
            .remove(&number)
            .ok_or(BankErr::AccountNotFound(number))?;
        self.by_username.remove(account.username());
        self.ordered.remove(number);
        debug_assert!(!self.ordered.contains(number));
        debug!(account = number, "account removed from index");
        Ok(account)
    }

    /// Accounts in ascending account number order. Lazy, call again to restart.
    pub fn ordered(&self) -> impl Iterator<Item = &CustomerAcc> + '_ {
        self.ordered
            .iter()
            .filter_map(|number| self.by_number.get(&number))
    }

    /// Number of indexed accounts
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    /// No account indexed
    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }

    #[cfg(test)]
    fn assert_views_consistent(&self) {
        assert_eq!(self.ordered.len(), self.by_number.len());
        assert_eq!(self.by_username.len(), self.by_number.len());
        for (number, acc) in &self.by_number {
            assert!(self.ordered.contains(*number));
            assert_eq!(self.by_username.get(acc.username()), Some(number));
        }
    }
}
