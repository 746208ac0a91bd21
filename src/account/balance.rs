use crate::{amount::Amount, errors::BalanceErr};
use rust_decimal::Decimal;

/// Represents current account balance. Never negative.
#[derive(Debug, Clone, Default)]
pub struct Balance {
    available: Decimal,
}

impl Balance {
    pub fn new(initial: &Amount) -> Self {
        Self {
            available: **initial,
        }
    }

    pub fn deposit(&mut self, amount: &Decimal) {
        self.available += amount;
    }

    pub fn check_withdraw(&self, amount: &Decimal) -> Result<(), BalanceErr> {
        if self.available < *amount {
            return Err(BalanceErr::InsufficientFunds {
                requested: *amount,
                available: self.available,
            });
        }
        Ok(())
    }

    pub fn try_withdraw(&mut self, amount: &Decimal) -> Result<(), BalanceErr> {
        self.check_withdraw(amount)?;

        self.available -= amount;
        debug_assert!(self.available >= Decimal::ZERO);
        Ok(())
    }

    pub fn available(&self) -> Decimal {
        self.available
    }
}
