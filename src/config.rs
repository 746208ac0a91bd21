//! Bank configuration
//!
//! Loads configuration from environment variables. Admin credentials have no built in default,
//! they must be supplied by whoever runs the bank.

use std::{env, fmt, str::FromStr};

use crate::AccountNumber;

/// First account number handed out when nothing else is configured
pub const DEFAULT_FIRST_ACCOUNT_NUMBER: AccountNumber = 1000;

/// What happens when a customer transfers money to own account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelfTransferPolicy {
    /// reject with an error
    #[default]
    Forbid,
    /// succeed without moving money or writing history
    NoOp,
}

impl FromStr for SelfTransferPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forbid" => Ok(Self::Forbid),
            "noop" | "no-op" => Ok(Self::NoOp),
            _ => Err(ConfigError::InvalidValue("BANK_SELF_TRANSFER")),
        }
    }
}

/// Admin console login
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    /// Create credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both `username` and `password` match
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Bank configuration
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Admin console login
    pub admin: AdminCredentials,

    /// Account number given to first created account
    pub first_account_number: AccountNumber,

    /// Handling of transfers where source and target are the same account
    pub self_transfer: SelfTransferPolicy,
}

impl BankConfig {
    /// Configuration with default numbering and policy
    pub fn new(admin: AdminCredentials) -> Self {
        Self {
            admin,
            first_account_number: DEFAULT_FIRST_ACCOUNT_NUMBER,
            self_transfer: SelfTransferPolicy::default(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = env::var("BANK_ADMIN_USERNAME")
            .map_err(|_| ConfigError::MissingEnv("BANK_ADMIN_USERNAME"))?;

        let password = env::var("BANK_ADMIN_PASSWORD")
            .map_err(|_| ConfigError::MissingEnv("BANK_ADMIN_PASSWORD"))?;

        let first_account_number = env::var("BANK_FIRST_ACCOUNT_NUMBER")
            .unwrap_or_else(|_| DEFAULT_FIRST_ACCOUNT_NUMBER.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BANK_FIRST_ACCOUNT_NUMBER"))?;

        let self_transfer = env::var("BANK_SELF_TRANSFER")
            .unwrap_or_else(|_| "forbid".to_string())
            .parse()?;

        Ok(Self {
            admin: AdminCredentials::new(username, password),
            first_account_number,
            self_transfer,
        })
    }
}

/// Configuration error types
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
