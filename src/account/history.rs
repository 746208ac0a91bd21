//! Represents account transaction history
use crate::{amount::Amount, AccountNumber};
use std::fmt;

/// One line of account transaction history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEntry {
    /// cash put into account
    Deposited(Amount),
    /// cash or cheque taken out of account
    Withdrew(Amount),
    /// money sent to other account
    Transferred {
        /// sent amount
        amount: Amount,
        /// receiving account
        to: AccountNumber,
    },
    /// money received from other account
    Received {
        /// received amount
        amount: Amount,
        /// sending account
        from: AccountNumber,
    },
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntry::Deposited(amount) => write!(f, "Deposited: {amount}"),
            LedgerEntry::Withdrew(amount) => write!(f, "Withdrew: {amount}"),
            LedgerEntry::Transferred { amount, to } => write!(f, "Transferred: {amount} to {to}"),
            LedgerEntry::Received { amount, from } => write!(f, "Received: {amount} from {from}"),
        }
    }
}

/// Append only log. Oldest entry first in memory.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<LedgerEntry>,
}

impl History {
    pub fn push(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// most recent entry first
    pub fn latest_first(&self) -> impl ExactSizeIterator<Item = &LedgerEntry> + '_ {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
mod test {
    use super::{History, LedgerEntry};
    use crate::amount::Amount;

    #[test]
    fn entries_render_like_statement_lines() {
        let a = Amount::new(3005, 1).unwrap();
        assert_eq!(LedgerEntry::Deposited(a).to_string(), "Deposited: 300.5");
        assert_eq!(LedgerEntry::Withdrew(a).to_string(), "Withdrew: 300.5");
        assert_eq!(
            LedgerEntry::Transferred { amount: a, to: 1001 }.to_string(),
            "Transferred: 300.5 to 1001"
        );
        assert_eq!(
            LedgerEntry::Received { amount: a, from: 1000 }.to_string(),
            "Received: 300.5 from 1000"
        );
    }

    #[test]
    fn latest_entry_comes_first() {
        let mut h = History::default();
        h.push(LedgerEntry::Deposited(Amount::new(1, 0).unwrap()));
        h.push(LedgerEntry::Withdrew(Amount::new(2, 0).unwrap()));

        let lines: Vec<String> = h.latest_first().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["Withdrew: 2", "Deposited: 1"]);
    }
}
