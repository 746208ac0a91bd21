//! # Bank-ledger
//! Application replays a banking session script from input csv file and prints all accounts,
//! sorted by account number, to output.
//!
//! ## Input format
//! csv with columns `op`, `account`, `pin`, `amount`, `target`, `username`, `password`, `name`,
//! `address`, `contact`
//!
//! ```csv
//! op,account,pin,amount,target,username,password,name,address,contact
//! create,,1234,1000,,alice,,Alice Smith,1 Main St,555-0100
//! login,1000,1234
//! withdraw,,,500
//! ```
//!
//! Admin credentials are read from `BANK_ADMIN_USERNAME` and `BANK_ADMIN_PASSWORD` (a `.env`
//! file is honoured). Logs go to stderr, filtered with `RUST_LOG`.

#![deny(missing_docs)]

use anyhow::Context;
use bank_ledger::{
    bank::Bank,
    config::BankConfig,
    csv::{self, RawCommand},
    session::Session,
};
use futures::StreamExt;
use std::env;
use tokio::{
    io::{stdout, BufReader},
    spawn,
    sync::mpsc::{channel, Sender},
};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn read_commands_from_file(
    filename: String,
    sender: Sender<RawCommand>,
) -> anyhow::Result<()> {
    let f = tokio::fs::File::open(filename)
        .await
        .context("access input file")?;

    let bf = BufReader::new(f);
    csv::deserialize_commands_from_csv_reader(bf, sender)
        .await
        .context("improper content of file")
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // CLI handle
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err(anyhow::Error::msg("expected exactly one path to csv file"));
    }

    let config = BankConfig::from_env().context("load bank configuration")?;
    let mut bank = Bank::new(config);

    // read commands from csv file
    let (tx_cmd, rx_cmd) = channel(8192);
    let task_read_csv = spawn(read_commands_from_file(args[1].clone(), tx_cmd));

    // replay commands in file order, a failed row is reported and skipped
    let mut session = Session::new(&mut bank);
    let mut commands = ReceiverStream::new(rx_cmd);
    while let Some(cmd) = commands.next().await {
        let op = cmd.op;
        if let Err(e) = session.apply(cmd) {
            warn!(?op, error = %e, "command rejected");
        }
    }
    task_read_csv.await??;
    info!(accounts = bank.index().len(), "session finished");

    // write summary of every account to stdout
    csv::summarize_accounts(tokio_stream::iter(bank.index().ordered()), stdout())
        .await
        .context("failed to save output")?;

    Ok(())
}
