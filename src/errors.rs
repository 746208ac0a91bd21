//! Possible errors

use crate::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Represent error when operation want to use zero or negative amount of money
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount must be greater than zero, got {0}")]
pub struct InvalidAmountErr(pub Decimal);

/// Represent error when PIN is not a 4-digit number
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("PIN must be a 4-digit number, got {0}")]
pub struct InvalidPinErr(pub u32);

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}

/// Returned when cash machine can not pay out exact amount with available notes
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispenseErr {
    #[error("amount {0} is not a multiple of 500")]
    NotMultiple(Decimal),
    #[error("cannot dispense exact change for {amount}, {remainder} left over")]
    Remainder { amount: Decimal, remainder: Decimal },
}

/// Group all errors that can occurs within bank core
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankErr {
    #[error("invalid amount")]
    InvalidAmount(#[from] InvalidAmountErr),
    #[error("invalid PIN")]
    InvalidPin(#[from] InvalidPinErr),
    #[error("insufficient funds")]
    InsufficientFunds(#[from] BalanceErr),
    #[error("account {0} not found")]
    AccountNotFound(AccountNumber),
    #[error("account number {0} already in use")]
    AccountNumberTaken(AccountNumber),
    #[error("no account numbers left")]
    AccountNumbersExhausted,
    #[error("username {0:?} already taken")]
    UsernameTaken(String),
    #[error("invalid admin credentials")]
    InvalidCredentials,
    #[error("non dispensable amount")]
    NonDispensableAmount(#[from] DispenseErr),
    #[error("incorrect PIN")]
    IncorrectPin,
    #[error("cannot transfer to the same account")]
    SelfTransfer,
}
