use super::balance::Balance;
use super::history::{History, LedgerEntry};
use super::pin::Pin;
use super::Account;
use crate::{amount::Amount, errors::BalanceErr, AccountNumber};
use rust_decimal::Decimal;

/// Personal details of account owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holder {
    /// full name, immutable after creation
    pub name: String,
    /// postal address, admin may change it
    pub address: String,
    /// phone or e-mail, admin may change it
    pub contact: String,
}

/// Customer identity, credentials, current balance and transactions history
#[derive(Debug, Clone)]
pub struct CustomerAcc {
    account_number: AccountNumber,
    username: String,
    holder: Holder,
    pin: Pin,
    balance: Balance,
    history: History,
}

impl CustomerAcc {
    /// Create new account with `initial` deposit and empty history
    pub fn new(
        account_number: AccountNumber,
        username: String,
        holder: Holder,
        initial: Amount,
        pin: Pin,
    ) -> Self {
        Self {
            account_number,
            username,
            holder,
            pin,
            balance: Balance::new(&initial),
            history: History::default(),
        }
    }

    #[cfg(test)]
    /// New account 1000 owned by `alice` with balance 750.0 and PIN 1234
    pub fn new_test_account() -> Self {
        let holder = Holder {
            name: "Alice Smith".into(),
            address: "1 Main St".into(),
            contact: "555-0100".into(),
        };
        let mut a = CustomerAcc::new(
            1000,
            "alice".into(),
            holder,
            Amount::new(1000, 0).unwrap(),
            Pin::try_from(1234).unwrap(),
        );
        a.record_withdraw(Amount::new(250, 0).unwrap()).unwrap();

        assert_eq!(a.balance(), Decimal::new(750, 0));

        a
    }

    /// Transactions history, most recent entry first
    pub fn history(&self) -> impl ExactSizeIterator<Item = &LedgerEntry> + '_ {
        self.history.latest_first()
    }

    /// Check PIN entered by user
    pub fn pin_matches(&self, entered: u32) -> bool {
        self.pin.matches(entered)
    }

    pub(crate) fn set_pin(&mut self, pin: Pin) {
        self.pin = pin;
    }

    pub(crate) fn update_contact_details(&mut self, address: String, contact: String) {
        self.holder.address = address;
        self.holder.contact = contact;
    }

    /// Fails without touching the account when balance is lower than `amount`
    pub(crate) fn check_funds(&self, amount: &Amount) -> Result<(), BalanceErr> {
        self.balance.check_withdraw(amount)
    }

    pub(crate) fn record_deposit(&mut self, amount: Amount) {
        self.balance.deposit(&amount);
        self.history.push(LedgerEntry::Deposited(amount));
    }

    /// Nothing is recorded when funds are insufficient
    pub(crate) fn record_withdraw(&mut self, amount: Amount) -> Result<(), BalanceErr> {
        self.balance.try_withdraw(&amount)?;
        self.history.push(LedgerEntry::Withdrew(amount));
        Ok(())
    }

    pub(crate) fn record_transfer_out(
        &mut self,
        to: AccountNumber,
        amount: Amount,
    ) -> Result<(), BalanceErr> {
        self.balance.try_withdraw(&amount)?;
        self.history.push(LedgerEntry::Transferred { amount, to });
        Ok(())
    }

    pub(crate) fn record_transfer_in(&mut self, from: AccountNumber, amount: Amount) {
        self.balance.deposit(&amount);
        self.history.push(LedgerEntry::Received { amount, from });
    }
}

impl Account for CustomerAcc {
    fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn name(&self) -> &str {
        &self.holder.name
    }

    fn address(&self) -> &str {
        &self.holder.address
    }

    fn contact(&self) -> &str {
        &self.holder.contact
    }

    fn balance(&self) -> Decimal {
        self.balance.available()
    }
}

#[cfg(test)]
mod test {
    use super::{Account, CustomerAcc, LedgerEntry};
    use crate::{account::Pin, amount::Amount};
    use rust_decimal_macros::dec;

    fn amount(n: u64) -> Amount {
        Amount::new(n, 0).unwrap()
    }

    #[test]
    fn new_account_has_empty_history() {
        let a = CustomerAcc::new(
            1000,
            "bob".into(),
            Default::default(),
            amount(10),
            Pin::try_from(1111).unwrap(),
        );
        assert_eq!(a.history().len(), 0);
        assert_eq!(a.balance(), dec!(10));
    }

    #[test]
    fn preventing_debt_withdraw() {
        let mut a = CustomerAcc::new_test_account();
        let history_len = a.history().len();

        a.record_withdraw(amount(751)).unwrap_err();

        assert_eq!(a.balance(), dec!(750));
        assert_eq!(a.history().len(), history_len);
    }

    #[test]
    fn deposit_and_withdraw() {
        let mut a = CustomerAcc::new_test_account();
        a.record_deposit(Amount::new(100, 1).unwrap());
        a.record_withdraw(Amount::new(7505, 1).unwrap()).unwrap();

        assert_eq!(a.balance(), dec!(9.5));
        assert_eq!(
            a.history().next(),
            Some(&LedgerEntry::Withdrew(Amount::new(7505, 1).unwrap()))
        );
    }

    #[test]
    fn transfer_entries_name_the_other_side() {
        let mut a = CustomerAcc::new_test_account();
        a.record_transfer_out(1001, amount(50)).unwrap();
        a.record_transfer_in(1002, amount(20));

        let lines: Vec<String> = a.history().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "Received: 20 from 1002",
                "Transferred: 50 to 1001",
                "Withdrew: 250"
            ]
        );
        assert_eq!(a.balance(), dec!(720));
    }

    #[test]
    fn pin_and_details_update() {
        let mut a = CustomerAcc::new_test_account();
        assert!(a.pin_matches(1234));

        a.set_pin(Pin::try_from(9876).unwrap());
        assert!(!a.pin_matches(1234));
        assert!(a.pin_matches(9876));

        a.update_contact_details(String::new(), "555-0199".into());
        assert_eq!(a.address(), "");
        assert_eq!(a.contact(), "555-0199");
        assert_eq!(a.name(), "Alice Smith");
    }
}
