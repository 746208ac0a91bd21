//! Customer sessions and admin console on top of [`AccountIndex`] and the transaction engine.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{
    account::{Account, CustomerAcc, Holder, LedgerEntry, Pin},
    amount::Amount,
    config::BankConfig,
    dispense::CashBreakdown,
    engine,
    errors::BankErr,
    index::AccountIndex,
    AccountNumber,
};

/// Proof of successful customer login, used for every customer operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountHandle(AccountNumber);

impl AccountHandle {
    /// account this handle gives access to
    pub fn account_number(&self) -> AccountNumber {
        self.0
    }
}

/// Proof of successful admin login, required by admin operations
#[derive(Debug)]
pub struct AdminSession(());

/// Everything needed to open an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// owner details
    pub holder: Holder,
    /// unique login name
    pub username: String,
    /// must be greater than zero
    pub initial_deposit: Decimal,
    /// 4-digit PIN
    pub pin: u32,
}

/// Whole bank state: accounts and the configuration they are served with
#[derive(Debug)]
pub struct Bank {
    config: BankConfig,
    index: AccountIndex,
}

impl Bank {
    /// Empty bank
    pub fn new(config: BankConfig) -> Self {
        let index = AccountIndex::starting_at(config.first_account_number);
        Self { config, index }
    }

    /// Read only access to all accounts
    pub fn index(&self) -> &AccountIndex {
        &self.index
    }

    /// Open new account and return its number.
    ///
    /// Account numbers are never reused, a failed request does not consume one.
    pub fn create_account(&mut self, request: NewAccount) -> Result<AccountNumber, BankErr> {
        let initial = Amount::try_from(request.initial_deposit)?;
        let pin = Pin::try_from(request.pin)?;
        if self.index.username_taken(&request.username) {
            return Err(BankErr::UsernameTaken(request.username));
        }

        let number = self.index.next_number()?;
        let account = CustomerAcc::new(number, request.username, request.holder, initial, pin);
        self.index.insert(account)?;
        info!(account = number, "account created");
        Ok(number)
    }

    /// Customer login
    pub fn login(&self, number: AccountNumber, pin: u32) -> Result<AccountHandle, BankErr> {
        let account = self.index.find_by_number(number)?;
        if !account.pin_matches(pin) {
            warn!(account = number, "incorrect PIN");
            return Err(BankErr::IncorrectPin);
        }
        Ok(AccountHandle(number))
    }

    /// Admin login
    pub fn admin_login(&self, username: &str, password: &str) -> Result<AdminSession, BankErr> {
        if self.is_admin(username, password) {
            info!("admin logged in");
            Ok(AdminSession(()))
        } else {
            warn!(username, "invalid admin credentials");
            Err(BankErr::InvalidCredentials)
        }
    }

    /// Do `username` and `password` match configured admin credentials
    pub fn is_admin(&self, username: &str, password: &str) -> bool {
        self.config.admin.matches(username, password)
    }

    /// Account behind `handle`
    pub fn account(&self, handle: &AccountHandle) -> Result<&CustomerAcc, BankErr> {
        self.index.find_by_number(handle.0)
    }

    fn account_mut(&mut self, handle: &AccountHandle) -> Result<&mut CustomerAcc, BankErr> {
        self.index.find_by_number_mut(handle.0)
    }

    /// Put cash into account
    pub fn deposit(&mut self, handle: &AccountHandle, amount: Decimal) -> Result<(), BankErr> {
        engine::deposit(self.account_mut(handle)?, amount)
    }

    /// Take cash out of account, returns notes to pay out
    pub fn withdraw(
        &mut self,
        handle: &AccountHandle,
        amount: Decimal,
    ) -> Result<CashBreakdown, BankErr> {
        engine::withdraw(self.account_mut(handle)?, amount)
    }

    /// Take money out of account by cheque
    pub fn withdraw_by_cheque(
        &mut self,
        handle: &AccountHandle,
        amount: Decimal,
    ) -> Result<(), BankErr> {
        engine::withdraw_by_cheque(self.account_mut(handle)?, amount)
    }

    /// Send money to account `target`
    pub fn transfer(
        &mut self,
        handle: &AccountHandle,
        target: AccountNumber,
        amount: Decimal,
    ) -> Result<(), BankErr> {
        engine::transfer(
            &mut self.index,
            handle.0,
            target,
            amount,
            self.config.self_transfer,
        )
    }

    /// Set new PIN
    pub fn change_pin(&mut self, handle: &AccountHandle, new_pin: u32) -> Result<(), BankErr> {
        engine::change_pin(self.account_mut(handle)?, new_pin)
    }

    /// Transaction history, most recent entry first
    pub fn history(
        &self,
        handle: &AccountHandle,
    ) -> Result<impl ExactSizeIterator<Item = &LedgerEntry> + '_, BankErr> {
        Ok(self.account(handle)?.history())
    }

    /// Close account. Its number is not handed out again.
    pub fn delete_account(
        &mut self,
        _admin: &AdminSession,
        number: AccountNumber,
    ) -> Result<(), BankErr> {
        let account = self.index.remove(number)?;
        info!(account = number, balance = %account.balance(), "account deleted");
        Ok(())
    }

    /// Overwrite address and contact, empty values are allowed
    pub fn update_details(
        &mut self,
        _admin: &AdminSession,
        number: AccountNumber,
        address: String,
        contact: String,
    ) -> Result<(), BankErr> {
        self.index
            .find_by_number_mut(number)?
            .update_contact_details(address, contact);
        info!(account = number, "account details updated");
        Ok(())
    }

    /// Look account up by owner username
    pub fn search_by_username(&self, _admin: &AdminSession, username: &str) -> Option<&CustomerAcc> {
        self.index.find_by_username(username)
    }

    /// All accounts, ascending account number
    pub fn list_all_accounts(
        &self,
        _admin: &AdminSession,
    ) -> impl Iterator<Item = &CustomerAcc> + '_ {
        self.index.ordered()
    }
}

#[cfg(test)]
mod test {
    use super::{Bank, NewAccount};
    use crate::{
        account::{Account, Holder},
        config::{AdminCredentials, BankConfig},
        errors::{BankErr, InvalidAmountErr, InvalidPinErr},
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn bank() -> Bank {
        Bank::new(BankConfig::new(AdminCredentials::new("root", "s3cret")))
    }

    fn request(username: &str, initial_deposit: Decimal) -> NewAccount {
        NewAccount {
            holder: Holder {
                name: format!("{username} name"),
                address: "street".into(),
                contact: "phone".into(),
            },
            username: username.into(),
            initial_deposit,
            pin: 1234,
        }
    }

    #[test]
    fn numbers_start_at_1000_and_increase() {
        let mut b = bank();
        assert_eq!(b.create_account(request("a", dec!(1))).unwrap(), 1000);
        assert_eq!(b.create_account(request("b", dec!(1))).unwrap(), 1001);
    }

    #[test]
    fn invalid_requests_do_not_consume_numbers() {
        let mut b = bank();
        b.create_account(request("a", dec!(1))).unwrap();

        assert_eq!(
            b.create_account(request("b", dec!(0))),
            Err(InvalidAmountErr(dec!(0)).into())
        );
        let mut bad_pin = request("b", dec!(1));
        bad_pin.pin = 123;
        assert_eq!(b.create_account(bad_pin), Err(InvalidPinErr(123).into()));
        assert_eq!(
            b.create_account(request("a", dec!(1))),
            Err(BankErr::UsernameTaken("a".into()))
        );
        assert_eq!(b.index().len(), 1);

        assert_eq!(b.create_account(request("b", dec!(1))).unwrap(), 1001);
    }

    #[test]
    fn exhausted_numbers_are_reported() {
        let mut config = BankConfig::new(AdminCredentials::new("root", "s3cret"));
        config.first_account_number = u32::MAX;
        let mut b = Bank::new(config);

        assert_eq!(b.create_account(request("a", dec!(1))).unwrap(), u32::MAX);
        assert_eq!(
            b.create_account(request("b", dec!(1))),
            Err(BankErr::AccountNumbersExhausted)
        );
        assert!(!b.index().username_taken("b"));
        assert_eq!(b.index().len(), 1);
    }

    #[test]
    fn deleted_numbers_are_not_reused() {
        let mut b = bank();
        let admin = b.admin_login("root", "s3cret").unwrap();
        let n = b.create_account(request("a", dec!(1))).unwrap();
        b.delete_account(&admin, n).unwrap();

        assert_eq!(b.create_account(request("b", dec!(1))).unwrap(), n + 1);
        assert_eq!(b.delete_account(&admin, n), Err(BankErr::AccountNotFound(n)));
    }

    #[test]
    fn login_checks_pin() {
        let mut b = bank();
        let n = b.create_account(request("a", dec!(1))).unwrap();

        assert_eq!(b.login(n, 4321), Err(BankErr::IncorrectPin));
        assert_eq!(b.login(n + 1, 1234), Err(BankErr::AccountNotFound(n + 1)));
        assert_eq!(b.login(n, 1234).unwrap().account_number(), n);
    }

    #[test]
    fn admin_credentials_must_both_match() {
        let b = bank();
        assert_eq!(
            b.admin_login("root", "admin123").unwrap_err(),
            BankErr::InvalidCredentials
        );
        assert!(!b.is_admin("admin", "s3cret"));
        assert!(b.admin_login("root", "s3cret").is_ok());
    }

    #[test]
    fn handle_of_deleted_account_stops_working() {
        let mut b = bank();
        let admin = b.admin_login("root", "s3cret").unwrap();
        let n = b.create_account(request("a", dec!(100))).unwrap();
        let handle = b.login(n, 1234).unwrap();

        b.delete_account(&admin, n).unwrap();
        assert_eq!(
            b.deposit(&handle, dec!(1)),
            Err(BankErr::AccountNotFound(n))
        );
        assert!(b.history(&handle).is_err());
    }

    #[test]
    fn admin_update_and_search() {
        let mut b = bank();
        let admin = b.admin_login("root", "s3cret").unwrap();
        let n = b.create_account(request("alice", dec!(100))).unwrap();

        b.update_details(&admin, n, String::new(), "mail@example.com".into())
            .unwrap();
        let found = b.search_by_username(&admin, "alice").unwrap();
        assert_eq!(found.account_number(), n);
        assert_eq!(found.address(), "");
        assert_eq!(found.contact(), "mail@example.com");
        assert!(b.search_by_username(&admin, "bob").is_none());

        assert_eq!(
            b.update_details(&admin, 42, "x".into(), "y".into()),
            Err(BankErr::AccountNotFound(42))
        );
    }

    #[test]
    fn list_is_sorted_by_account_number() {
        let mut b = bank();
        let admin = b.admin_login("root", "s3cret").unwrap();
        for u in ["a", "b", "c", "d"] {
            b.create_account(request(u, dec!(1))).unwrap();
        }
        b.delete_account(&admin, 1001).unwrap();

        let numbers: Vec<u32> = b
            .list_all_accounts(&admin)
            .map(|a| a.account_number())
            .collect();
        assert_eq!(numbers, vec![1000, 1002, 1003]);
    }
}
