//! Decompose withdrawal amount into bank notes.

use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{amount::Amount, errors::DispenseErr};

/// Notes available in cash machine, largest first
pub const DENOMINATIONS: [u32; 3] = [5000, 1000, 500];

/// Number of notes of each denomination paid out
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CashBreakdown {
    pub notes_5000: u32,
    pub notes_1000: u32,
    pub notes_500: u32,
}

impl CashBreakdown {
    /// `(denomination, count)` pairs, largest denomination first
    pub fn notes(&self) -> [(u32, u32); 3] {
        [
            (5000, self.notes_5000),
            (1000, self.notes_1000),
            (500, self.notes_500),
        ]
    }
}

/// Greedy largest-first breakdown of `amount`. Amount must be a multiple of the smallest note.
pub fn cash_breakdown(amount: &Amount) -> Result<CashBreakdown, DispenseErr> {
    let smallest = Decimal::from(DENOMINATIONS[DENOMINATIONS.len() - 1]);
    if !(**amount % smallest).is_zero() {
        return Err(DispenseErr::NotMultiple(**amount));
    }

    let mut remainder = **amount;
    let mut counts = [0u32; 3];
    for (count, denomination) in counts.iter_mut().zip(DENOMINATIONS) {
        let denomination = Decimal::from(denomination);
        let notes = (remainder / denomination).trunc();
        *count = notes.to_u32().ok_or(DispenseErr::NotMultiple(**amount))?;
        remainder -= notes * denomination;
    }

    // cannot trigger while the multiple check above holds
    if !remainder.is_zero() {
        return Err(DispenseErr::Remainder {
            amount: **amount,
            remainder,
        });
    }

    let [notes_5000, notes_1000, notes_500] = counts;
    Ok(CashBreakdown {
        notes_5000,
        notes_1000,
        notes_500,
    })
}

#[cfg(test)]
mod test {
    use super::{cash_breakdown, CashBreakdown};
    use crate::{amount::Amount, errors::DispenseErr};
    use rust_decimal_macros::dec;

    fn breakdown(n: u64) -> Result<CashBreakdown, DispenseErr> {
        cash_breakdown(&Amount::new(n, 0).unwrap())
    }

    #[test]
    fn greedy_largest_first() {
        assert_eq!(
            breakdown(5500).unwrap(),
            CashBreakdown {
                notes_5000: 1,
                notes_1000: 0,
                notes_500: 1
            }
        );
        assert_eq!(
            breakdown(1500).unwrap(),
            CashBreakdown {
                notes_5000: 0,
                notes_1000: 1,
                notes_500: 1
            }
        );
        assert_eq!(
            breakdown(17500).unwrap().notes(),
            [(5000, 3), (1000, 2), (500, 1)]
        );
    }

    #[test]
    fn not_multiple_of_500_fails() {
        assert_eq!(breakdown(700), Err(DispenseErr::NotMultiple(dec!(700))));
        assert_eq!(breakdown(250), Err(DispenseErr::NotMultiple(dec!(250))));
    }

    #[test]
    fn fractional_amount_fails() {
        let a = Amount::try_from(dec!(500.5)).unwrap();
        assert_eq!(cash_breakdown(&a), Err(DispenseErr::NotMultiple(dec!(500.5))));

        let whole = Amount::try_from(dec!(1000.00)).unwrap();
        assert_eq!(cash_breakdown(&whole).unwrap().notes_1000, 1);
    }
}
