//! csv input/output format and functions

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::{account::Account, AccountNumber};
use serde::{Deserialize, Serialize};

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc::Sender,
};
use tokio_stream::{Stream, StreamExt};
use tracing::warn;

// Allowed session script operations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum RawOp {
    Create,
    Login,
    Logout,
    Deposit,
    Withdraw,
    WithdrawCheque,
    Transfer,
    ChangePin,
    History,
    AdminLogin,
    AdminLogout,
    Delete,
    Update,
    Search,
    List,
}

/// One row of session script. Which columns are needed depends on `op`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawCommand {
    pub op: RawOp,
    pub account: Option<AccountNumber>,
    pub pin: Option<u32>,
    pub amount: Option<Decimal>,
    pub target: Option<AccountNumber>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
}

impl RawCommand {
    /// Command with every column left empty
    pub fn new(op: RawOp) -> Self {
        Self {
            op,
            account: None,
            pin: None,
            amount: None,
            target: None,
            username: None,
            password: None,
            name: None,
            address: None,
            contact: None,
        }
    }
}

/// take a reader and continuously deserialize commands from it into `sender`. Rows that do not
/// fit [`RawCommand`] are logged and skipped, i/o errors end the read.
pub async fn deserialize_commands_from_csv_reader<'r, R: AsyncRead + Unpin + Send + 'r>(
    input: R,
    sender: Sender<RawCommand>,
) -> anyhow::Result<()> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All).flexible(true);

    let mut rdr = builder.create_deserializer(input);

    let _headers = rdr.headers().await?;

    let mut records = rdr.deserialize::<RawCommand>();
    while let Some(record) = records.next().await {
        let record: RawCommand = match record {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv_async::ErrorKind::Deserialize { .. }) => {
                warn!(
                    line = e.position().map(|pos| pos.line()),
                    error = %e,
                    "malformed row skipped"
                );
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        sender.send(record).await?;
    }

    Ok(())
}

/// summary of account identity and balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub account: AccountNumber,
    pub username: String,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub balance: Decimal,
}

impl<T: Account> From<T> for AccountSummary {
    fn from(oth: T) -> Self {
        let rp = 2; // round precision
        Self {
            account: oth.account_number(),
            username: oth.username().to_owned(),
            name: oth.name().to_owned(),
            address: oth.address().to_owned(),
            contact: oth.contact().to_owned(),
            balance: oth.balance().round_dp(rp),
        }
    }
}

/// read items from `in_stream` and save them as [`AccountSummary`] into `wr`. Headers will be
/// included automatically. Terminator is `\r\n`.
pub async fn summarize_accounts(
    in_stream: impl Stream<Item = impl Account> + Unpin,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut in_stream = in_stream;

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    while let Some(acc) = in_stream.next().await {
        let acc_summary = AccountSummary::from(acc);
        wr.serialize(acc_summary).await?;
    }

    wr.flush().await?;
    Ok(())
}
