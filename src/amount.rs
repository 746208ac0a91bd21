//! Protect before using zero or negative amount for deposits, withdraws and transfers.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;

use crate::errors::InvalidAmountErr;

/// Represent strictly positive financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount from integer `num` with `scale` decimal places.
    pub fn new(num: u64, scale: u32) -> Result<Amount, InvalidAmountErr> {
        Decimal::from_i128_with_scale(num.into(), scale).try_into()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = InvalidAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value <= Decimal::ZERO {
            Err(InvalidAmountErr(value))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
