// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::insights::aggregate::{UNCATEGORIZED, normalize_category};
use crate::models::Transaction;
use crate::source::TransactionSource;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(source: &dyn TransactionSource) -> Result<()> {
    let rows = match source.fetch_all() {
        Ok(txs) => issues(&txs),
        Err(e) => vec![vec!["fetch_failed".into(), e.to_string()]],
    };
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Rows that the insights quietly skip or relabel.
pub fn issues(txs: &[Transaction]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Undated rows never reach the daily or monthly series
    for t in txs.iter().filter(|t| t.date.is_none()) {
        rows.push(vec![
            "undated".into(),
            format!("id {} ({} {})", t.id, t.kind, t.amount),
        ]);
    }

    // 2) Negative magnitudes: direction belongs in the type
    for t in txs.iter().filter(|t| t.amount < Decimal::ZERO) {
        rows.push(vec![
            "negative_amount".into(),
            format!("id {} ({} {})", t.id, t.kind, t.amount),
        ]);
    }

    // 3) Expenses that land in the Uncategorized bucket
    let uncategorized = txs
        .iter()
        .filter(|t| t.is_expense() && normalize_category(t.category.as_deref()) == UNCATEGORIZED)
        .count();
    if uncategorized > 0 {
        rows.push(vec![
            "uncategorized_expense".into(),
            format!("{} expense(s) without a category", uncategorized),
        ]);
    }
    rows
}
