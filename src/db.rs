// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FetchError;
use crate::models::Transaction;
use crate::source::{TransactionSource, decode_row};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Ledgerlens", "ledgerlens"));

pub const DB_FILE: &str = "ledger.sqlite";

/// Default ledger location in the platform data dir. Nothing is created.
pub fn default_db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join(DB_FILE))
}

enum Handle {
    Path(PathBuf),
    Conn(Connection),
}

/// Ledger database read through a read-only connection.
///
/// Expected table:
/// `transactions(id, t_date, description, category, amount, t_type)`.
pub struct SqliteSource {
    handle: Handle,
}

impl SqliteSource {
    /// Opens a fresh read-only connection on every fetch.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            handle: Handle::Path(path.into()),
        }
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            handle: Handle::Conn(conn),
        }
    }
}

impl TransactionSource for SqliteSource {
    fn fetch_all(&self) -> Result<Vec<Transaction>, FetchError> {
        match &self.handle {
            Handle::Path(path) => {
                tracing::debug!(path = %path.display(), "opening ledger read-only");
                let conn = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )?;
                load_transactions(&conn)
            }
            Handle::Conn(conn) => load_transactions(conn),
        }
    }
}

pub fn load_transactions(conn: &Connection) -> Result<Vec<Transaction>, FetchError> {
    let mut stmt = conn.prepare(
        "SELECT id, t_date, description, category, CAST(amount AS TEXT), t_type
         FROM transactions
         ORDER BY t_date DESC, id DESC",
    )?;
    let mut rows = stmt.query([])?;

    let mut data = Vec::new();
    let mut n = 0usize;
    while let Some(r) = rows.next()? {
        n += 1;
        let id: i64 = r.get(0)?;
        let date: Option<String> = r.get(1)?;
        let description: Option<String> = r.get(2)?;
        let category: Option<String> = r.get(3)?;
        let amount: Option<String> = r.get(4)?;
        let kind: Option<String> = r.get(5)?;
        data.push(decode_row(
            n,
            id,
            date.as_deref(),
            description.as_deref(),
            category.as_deref(),
            amount.as_deref().unwrap_or_default(),
            kind.as_deref().unwrap_or_default(),
        )?);
    }
    tracing::debug!(rows = data.len(), "loaded ledger snapshot");
    Ok(data)
}
