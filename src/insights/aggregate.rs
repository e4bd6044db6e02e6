// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{accumulate, checked_sum};
use crate::error::InsightError;
use crate::models::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Expense magnitude per category label. Only strictly positive totals are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(BTreeMap<String, Decimal>);

impl CategoryTotals {
    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn total(&self) -> Result<Decimal, InsightError> {
        checked_sum(self.0.values().copied(), "category total")
    }

    /// Largest spend first; equal amounts fall back to label order.
    pub fn ranked(&self) -> Vec<(String, Decimal)> {
        let mut items: Vec<(String, Decimal)> =
            self.0.iter().map(|(k, v)| (k.clone(), *v)).collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        items
    }

    pub fn top(&self, n: usize) -> Vec<(String, Decimal)> {
        let mut items = self.ranked();
        items.truncate(n);
        items
    }
}

pub fn normalize_category(label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => UNCATEGORIZED.to_string(),
    }
}

pub fn category_totals(txs: &[Transaction]) -> Result<CategoryTotals, InsightError> {
    let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in txs.iter().filter(|t| t.is_expense()) {
        let slot = agg
            .entry(normalize_category(t.category.as_deref()))
            .or_insert(Decimal::ZERO);
        accumulate(slot, t.amount, "category totals")?;
    }
    agg.retain(|_, total| *total > Decimal::ZERO);
    Ok(CategoryTotals(agg))
}
