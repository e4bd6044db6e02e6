// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::accumulate;
use crate::error::InsightError;
use crate::models::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;

/// Overall income and expense sums across the whole snapshot, dated or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub fn totals(txs: &[Transaction]) -> Result<Totals, InsightError> {
    let mut out = Totals::default();
    for t in txs {
        if t.is_income() {
            accumulate(&mut out.income, t.amount, "income total")?;
        } else if t.is_expense() {
            accumulate(&mut out.expense, t.amount, "expense total")?;
        }
    }
    out.net = out
        .income
        .checked_sub(out.expense)
        .ok_or(InsightError::Overflow("net total"))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Kind;
    use chrono::NaiveDate;

    fn tx(date: Option<&str>, cents: i64, kind: Kind) -> Transaction {
        Transaction {
            id: 0,
            date: date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            description: String::new(),
            category: None,
            amount: Decimal::new(cents, 2),
            kind,
        }
    }

    #[test]
    fn sums_both_sides_including_undated_rows() {
        let txs = vec![
            tx(Some("2025-01-01"), 300000, Kind::Income),
            tx(None, 5000, Kind::Income),
            tx(Some("2025-01-03"), 12550, Kind::Expense),
            tx(None, 1000, Kind::Expense),
        ];
        let t = totals(&txs).unwrap();
        assert_eq!(t.income, Decimal::new(305000, 2));
        assert_eq!(t.expense, Decimal::new(13550, 2));
        assert_eq!(t.net, Decimal::new(291450, 2));
    }

    #[test]
    fn spending_more_than_earned_is_a_negative_net() {
        let txs = vec![tx(None, 100, Kind::Income), tx(None, 250, Kind::Expense)];
        assert_eq!(totals(&txs).unwrap().net, Decimal::new(-150, 2));
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(totals(&[]).unwrap(), Totals::default());
    }

    #[test]
    fn overflowing_side_is_reported() {
        let mut txs = vec![tx(None, 0, Kind::Income), tx(None, 0, Kind::Income)];
        txs.iter_mut()
            .for_each(|t| t.amount = Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0));
        assert_eq!(totals(&txs), Err(InsightError::Overflow("income total")));
    }
}
