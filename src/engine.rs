//! Money movement and credential changes on already resolved accounts.
//!
//! Every function validates all of its input before touching the account, so a returned error
//! means no state has changed.

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    account::{Account, CustomerAcc, Pin},
    amount::Amount,
    config::SelfTransferPolicy,
    dispense::{cash_breakdown, CashBreakdown},
    errors::BankErr,
    index::AccountIndex,
    AccountNumber,
};

/// Put `amount` into `account`
pub fn deposit(account: &mut CustomerAcc, amount: Decimal) -> Result<(), BankErr> {
    let amount = Amount::try_from(amount)?;
    account.record_deposit(amount);
    info!(account = account.account_number(), %amount, "deposit");
    Ok(())
}

/// Pay out `amount` in cash.
///
/// Amount must be dispensable with available notes, checked before balance is debited.
pub fn withdraw(account: &mut CustomerAcc, amount: Decimal) -> Result<CashBreakdown, BankErr> {
    let amount = Amount::try_from(amount)?;
    account.check_funds(&amount)?;
    let notes = cash_breakdown(&amount)?;

    account.record_withdraw(amount)?;
    info!(account = account.account_number(), %amount, ?notes, "cash withdrawal");
    Ok(notes)
}

/// Pay out `amount` by cheque, any positive amount is accepted
pub fn withdraw_by_cheque(account: &mut CustomerAcc, amount: Decimal) -> Result<(), BankErr> {
    let amount = Amount::try_from(amount)?;
    account.record_withdraw(amount)?;
    info!(account = account.account_number(), %amount, "cheque withdrawal");
    Ok(())
}

/// Move `amount` from `source` to `target`, both looked up in `index`
pub fn transfer(
    index: &mut AccountIndex,
    source: AccountNumber,
    target: AccountNumber,
    amount: Decimal,
    self_transfer: SelfTransferPolicy,
) -> Result<(), BankErr> {
    let amount = Amount::try_from(amount)?;
    if source == target {
        return match self_transfer {
            SelfTransferPolicy::Forbid => Err(BankErr::SelfTransfer),
            SelfTransferPolicy::NoOp => {
                index.find_by_number(source)?;
                Ok(())
            }
        };
    }

    index.find_by_number(source)?.check_funds(&amount)?;
    index.find_by_number(target)?;

    index
        .find_by_number_mut(source)?
        .record_transfer_out(target, amount)?;
    index
        .find_by_number_mut(target)?
        .record_transfer_in(source, amount);
    info!(source, target, %amount, "transfer");
    Ok(())
}

/// Replace PIN of `account`. No history entry is made.
pub fn change_pin(account: &mut CustomerAcc, new_pin: u32) -> Result<(), BankErr> {
    let pin = Pin::try_from(new_pin)?;
    account.set_pin(pin);
    info!(account = account.account_number(), "PIN changed");
    Ok(())
}
