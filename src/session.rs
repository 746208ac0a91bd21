//! Replays session script commands against a [`Bank`], one row at a time.
//!
//! The session remembers the last logged in customer and whether an admin is logged in, the same
//! way an interactive console would between prompts.

use thiserror::Error;
use tracing::info;

use crate::{
    account::{Account, Holder},
    bank::{AccountHandle, AdminSession, Bank, NewAccount},
    csv::{RawCommand, RawOp},
    errors::BankErr,
};

/// Errors of a single script row
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionErr {
    #[error(transparent)]
    Bank(#[from] BankErr),
    #[error("column `{0}` is required for this operation")]
    MissingField(&'static str),
    #[error("no customer logged in")]
    NotLoggedIn,
    #[error("admin login required")]
    AdminRequired,
}

/// Console state between commands
#[derive(Debug)]
pub struct Session<'b> {
    bank: &'b mut Bank,
    customer: Option<AccountHandle>,
    admin: Option<AdminSession>,
}

fn admin_session(admin: &Option<AdminSession>) -> Result<&AdminSession, SessionErr> {
    admin.as_ref().ok_or(SessionErr::AdminRequired)
}

fn required<T>(value: Option<T>, column: &'static str) -> Result<T, SessionErr> {
    value.ok_or(SessionErr::MissingField(column))
}

impl<'b> Session<'b> {
    /// Start with nobody logged in
    pub fn new(bank: &'b mut Bank) -> Self {
        Self {
            bank,
            customer: None,
            admin: None,
        }
    }

    /// Currently logged in customer
    pub fn customer(&self) -> Option<AccountHandle> {
        self.customer
    }

    /// Is admin logged in
    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }

    fn customer_handle(&self) -> Result<AccountHandle, SessionErr> {
        self.customer.ok_or(SessionErr::NotLoggedIn)
    }

    /// Execute one command. On error bank state is left unchanged.
    pub fn apply(&mut self, cmd: RawCommand) -> Result<(), SessionErr> {
        match cmd.op {
            RawOp::Create => {
                let request = NewAccount {
                    holder: Holder {
                        name: cmd.name.unwrap_or_default(),
                        address: cmd.address.unwrap_or_default(),
                        contact: cmd.contact.unwrap_or_default(),
                    },
                    username: required(cmd.username, "username")?,
                    initial_deposit: required(cmd.amount, "amount")?,
                    pin: required(cmd.pin, "pin")?,
                };
                let number = self.bank.create_account(request)?;
                info!(account = number, "your account number");
            }
            RawOp::Login => {
                // failed login ends previous customer session
                self.customer = None;
                let handle = self.bank.login(
                    required(cmd.account, "account")?,
                    required(cmd.pin, "pin")?,
                )?;
                self.customer = Some(handle);
            }
            RawOp::Logout => self.customer = None,
            RawOp::Deposit => {
                let handle = self.customer_handle()?;
                self.bank
                    .deposit(&handle, required(cmd.amount, "amount")?)?;
            }
            RawOp::Withdraw => {
                let handle = self.customer_handle()?;
                let notes = self
                    .bank
                    .withdraw(&handle, required(cmd.amount, "amount")?)?;
                for (denomination, count) in notes.notes() {
                    info!(denomination, count, "dispensed");
                }
            }
            RawOp::WithdrawCheque => {
                let handle = self.customer_handle()?;
                self.bank
                    .withdraw_by_cheque(&handle, required(cmd.amount, "amount")?)?;
            }
            RawOp::Transfer => {
                let handle = self.customer_handle()?;
                self.bank.transfer(
                    &handle,
                    required(cmd.target, "target")?,
                    required(cmd.amount, "amount")?,
                )?;
            }
            RawOp::ChangePin => {
                let handle = self.customer_handle()?;
                self.bank.change_pin(&handle, required(cmd.pin, "pin")?)?;
            }
            RawOp::History => {
                let handle = self.customer_handle()?;
                let history = self.bank.history(&handle)?;
                if history.len() == 0 {
                    info!(account = handle.account_number(), "no transactions found");
                }
                for entry in history {
                    info!(account = handle.account_number(), "{entry}");
                }
            }
            RawOp::AdminLogin => {
                self.admin = None;
                let admin = self.bank.admin_login(
                    cmd.username.as_deref().unwrap_or_default(),
                    cmd.password.as_deref().unwrap_or_default(),
                )?;
                self.admin = Some(admin);
            }
            RawOp::AdminLogout => self.admin = None,
            RawOp::Delete => {
                let admin = admin_session(&self.admin)?;
                self.bank
                    .delete_account(admin, required(cmd.account, "account")?)?;
            }
            RawOp::Update => {
                let admin = admin_session(&self.admin)?;
                self.bank.update_details(
                    admin,
                    required(cmd.account, "account")?,
                    cmd.address.unwrap_or_default(),
                    cmd.contact.unwrap_or_default(),
                )?;
            }
            RawOp::Search => {
                let admin = admin_session(&self.admin)?;
                let username = required(cmd.username, "username")?;
                match self.bank.search_by_username(admin, &username) {
                    Some(acc) => info!(
                        account = acc.account_number(),
                        name = acc.name(),
                        balance = %acc.balance(),
                        "account found"
                    ),
                    None => info!(%username, "account not found with the given username"),
                }
            }
            RawOp::List => {
                let admin = admin_session(&self.admin)?;
                for acc in self.bank.list_all_accounts(admin) {
                    info!(
                        account = acc.account_number(),
                        name = acc.name(),
                        balance = %acc.balance(),
                        "account"
                    );
                }
            }
        }
        Ok(())
    }
}
