// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FetchError;
use crate::models::{Kind, Transaction};
use crate::utils::{parse_date, parse_decimal};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::PathBuf;

/// Read-only supplier of a transaction snapshot.
pub trait TransactionSource {
    fn fetch_all(&self) -> Result<Vec<Transaction>, FetchError>;
}

impl<T: TransactionSource + ?Sized> TransactionSource for Box<T> {
    fn fetch_all(&self) -> Result<Vec<Transaction>, FetchError> {
        (**self).fetch_all()
    }
}

impl TransactionSource for Vec<Transaction> {
    fn fetch_all(&self) -> Result<Vec<Transaction>, FetchError> {
        Ok(self.clone())
    }
}

/// Builds a transaction from raw text columns. Blank dates become `None`.
pub(crate) fn decode_row(
    row: usize,
    id: i64,
    date: Option<&str>,
    description: Option<&str>,
    category: Option<&str>,
    amount: &str,
    kind: &str,
) -> Result<Transaction, FetchError> {
    let invalid = |reason: String| FetchError::InvalidRow { row, reason };

    let date = match date.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => Some(parse_date(s).map_err(|e| invalid(e.to_string()))?),
        None => None,
    };
    let amount = parse_decimal(amount.trim()).map_err(|e| invalid(e.to_string()))?;
    let kind: Kind = kind.parse().map_err(invalid)?;

    Ok(Transaction {
        id,
        date,
        description: description.unwrap_or_default().trim().to_string(),
        category: category
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        amount,
        kind,
    })
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default, alias = "t_date")]
    date: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    amount: String,
    #[serde(alias = "t_type", alias = "kind")]
    r#type: String,
}

/// A CSV export with a header row: `date,description,category,amount,type`.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for CsvSource {
    fn fetch_all(&self) -> Result<Vec<Transaction>, FetchError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut out = Vec::new();
        for (i, result) in rdr.deserialize::<CsvRecord>().enumerate() {
            let rec = result?;
            // header is line 1
            let line = i + 2;
            out.push(decode_row(
                line,
                rec.id.unwrap_or(line as i64 - 1),
                rec.date.as_deref(),
                rec.description.as_deref(),
                rec.category.as_deref(),
                &rec.amount,
                &rec.r#type,
            )?);
        }
        tracing::debug!(path = %self.path.display(), rows = out.len(), "read csv snapshot");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn decode_row_normalizes_blank_fields() {
        let t = decode_row(1, 7, Some("  "), None, Some(" "), "12.50", "Expense").unwrap();
        assert_eq!(t.id, 7);
        assert_eq!(t.date, None);
        assert_eq!(t.category, None);
        assert_eq!(t.amount, Decimal::new(1250, 2));
        assert_eq!(t.kind, Kind::Expense);
    }

    #[test]
    fn decode_row_reports_the_offending_row() {
        let err = decode_row(4, 1, Some("2024-01-01"), None, None, "abc", "expense").unwrap_err();
        match err {
            FetchError::InvalidRow { row, reason } => {
                assert_eq!(row, 4);
                assert!(reason.contains("Invalid decimal"));
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(decode_row(2, 1, Some("2024-13-01"), None, None, "1", "expense").is_err());
        assert!(decode_row(2, 1, None, None, None, "1", "refund").is_err());
    }
}
