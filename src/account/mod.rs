//! Account traits and structs
use crate::AccountNumber;
use rust_decimal::Decimal;

pub(crate) mod balance;
pub(crate) mod customer_account;
pub(crate) mod history;
pub(crate) mod pin;

pub use customer_account::{CustomerAcc, Holder};
pub use history::LedgerEntry;
pub use pin::Pin;

/// Represent basic account information and balance
pub trait Account {
    /// identifier of account
    fn account_number(&self) -> AccountNumber;
    /// unique login name of account owner
    fn username(&self) -> &str;
    /// full name of account owner
    fn name(&self) -> &str;
    /// postal address of account owner
    fn address(&self) -> &str;
    /// contact of account owner
    fn contact(&self) -> &str;
    /// amount of money available for withdraw
    fn balance(&self) -> Decimal;
}

impl<T: Account + ?Sized> Account for &T {
    fn account_number(&self) -> AccountNumber {
        (**self).account_number()
    }
    fn username(&self) -> &str {
        (**self).username()
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn address(&self) -> &str {
        (**self).address()
    }
    fn contact(&self) -> &str {
        (**self).contact()
    }
    fn balance(&self) -> Decimal {
        (**self).balance()
    }
}
