// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a ledger entry. Amounts are always magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("income") {
            Ok(Kind::Income)
        } else if s.eq_ignore_ascii_case("expense") {
            Ok(Kind::Expense)
        } else {
            Err(format!("unknown transaction type '{}', expected income|expense", s))
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Income => f.write_str("income"),
            Kind::Expense => f.write_str("expense"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: Option<NaiveDate>, // undated rows never enter a time series
    pub description: String,
    pub category: Option<String>,
    pub amount: Decimal,
    pub kind: Kind,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("EXPENSE".parse::<Kind>().unwrap(), Kind::Expense);
        assert_eq!(" Income ".parse::<Kind>().unwrap(), Kind::Income);
        assert!("transfer".parse::<Kind>().is_err());
    }
}
