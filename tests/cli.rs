use std::{collections::BTreeMap, fs::File, io::Read};

use assert_cmd::Command;
use bank_ledger::{csv::AccountSummary, AccountNumber};

fn executable() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("BANK_ADMIN_USERNAME", "root")
        .env("BANK_ADMIN_PASSWORD", "s3cret")
        .env_remove("BANK_FIRST_ACCOUNT_NUMBER")
        .env_remove("BANK_SELF_TRANSFER");
    cmd
}

fn read_summary(reader: impl Read) -> anyhow::Result<BTreeMap<AccountNumber, AccountSummary>> {
    let mut b = csv::ReaderBuilder::new();
    b.trim(csv::Trim::All);
    let mut rdr = b.from_reader(reader);

    let mut map = BTreeMap::new();
    for acc_summ in rdr.deserialize() {
        let acc_summ: AccountSummary = acc_summ?;

        assert!(map.insert(acc_summ.account, acc_summ).is_none());
    }

    Ok(map)
}

fn run_script(mut cmd: Command, test_no: u32) {
    let in_file = format!("./tests/scripts/in{test_no}.csv");
    let out_file = format!("./tests/scripts/out{test_no}.csv");

    let out = cmd
        .arg(in_file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    //deserialize_output
    let out = read_summary(out.as_slice()).unwrap();
    let exp = read_summary(File::open(out_file).unwrap()).unwrap();
    assert_eq!(out, exp);
}

#[test]
fn system_test_default_config() {
    run_script(executable(), 1);
}

#[test]
fn system_test_custom_numbering_and_self_transfer_noop() {
    let mut cmd = executable();
    cmd.env("BANK_FIRST_ACCOUNT_NUMBER", "5000")
        .env("BANK_SELF_TRANSFER", "noop");
    run_script(cmd, 2);
}

#[test]
fn malformed_rows_do_not_abort_run() {
    run_script(executable(), 3);
}

#[test]
fn output_is_sorted_by_account_number() {
    let out = executable()
        .arg("./tests/scripts/in1.csv")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let numbers: Vec<&str> = text
        .lines()
        .skip(1)
        .filter_map(|l| l.split(',').next())
        .collect();
    assert_eq!(numbers, vec!["1000", "1001", "1003"]);
}

#[test]
fn missing_admin_credentials_fail() {
    let mut cmd = executable();
    cmd.env_remove("BANK_ADMIN_PASSWORD")
        .arg("./tests/scripts/in1.csv")
        .assert()
        .failure();
}

#[test]
fn wrong_argument_count_fails() {
    executable().assert().failure();
}
