// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::accumulate;
use crate::error::InsightError;
use crate::models::{Kind, Transaction};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Calendar month. Ordered by (year, month); displayed zero-padded as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTotal {
    pub month: MonthKey,
    pub total: Decimal,
}

/// Expense totals per month, strictly ascending by month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthlySeries(Vec<MonthTotal>);

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthTotal> {
        self.0.iter()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.0.iter().map(|m| m.total).collect()
    }

    pub fn last(&self) -> Option<&MonthTotal> {
        self.0.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Per-day income and expense sums. Iteration covers the union of both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailySeries {
    pub income: BTreeMap<NaiveDate, Decimal>,
    pub expense: BTreeMap<NaiveDate, Decimal>,
}

impl DailySeries {
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expense.is_empty()
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self
            .income
            .keys()
            .chain(self.expense.keys())
            .copied()
            .collect();
        days.sort();
        days.dedup();
        days
    }

    pub fn rows(&self) -> Vec<DailyRow> {
        self.days()
            .into_iter()
            .map(|date| DailyRow {
                date,
                income: self.income.get(&date).copied().unwrap_or(Decimal::ZERO),
                expense: self.expense.get(&date).copied().unwrap_or(Decimal::ZERO),
            })
            .collect()
    }
}

pub fn daily_series(txs: &[Transaction]) -> Result<DailySeries, InsightError> {
    let mut series = DailySeries::default();
    for t in txs {
        let Some(date) = t.date else { continue };
        let side = match t.kind {
            Kind::Income => &mut series.income,
            Kind::Expense => &mut series.expense,
        };
        accumulate(
            side.entry(date).or_insert(Decimal::ZERO),
            t.amount,
            "daily series",
        )?;
    }
    Ok(series)
}

pub fn monthly_series(txs: &[Transaction]) -> Result<MonthlySeries, InsightError> {
    let mut map: BTreeMap<MonthKey, Decimal> = BTreeMap::new();
    for t in txs.iter().filter(|t| t.is_expense()) {
        if let Some(date) = t.date {
            accumulate(
                map.entry(MonthKey::of(date)).or_insert(Decimal::ZERO),
                t.amount,
                "monthly series",
            )?;
        }
    }
    Ok(MonthlySeries(
        map.into_iter()
            .map(|(month, total)| MonthTotal { month, total })
            .collect(),
    ))
}
