// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{SqliteSource, default_db_path};
use crate::insights::transition::DEFAULT_STEPS;
use crate::source::{CsvSource, TransactionSource};
use anyhow::{Result, bail};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Sqlite { path: PathBuf },
    Csv { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsConfig {
    pub transition_steps: usize,
    pub frame_interval: Duration,
    pub currency: String,
    pub top_categories: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            transition_steps: DEFAULT_STEPS,
            frame_interval: Duration::from_millis(40),
            currency: "USD".into(),
            top_categories: 3,
        }
    }
}

/// Startup configuration, built once and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceConfig,
    pub insights: InsightsConfig,
}

impl Config {
    /// Reads the global `--db`/`--csv`/`--currency` flags.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db = m.get_one::<String>("db").map(|s| s.trim());
        let csv = m.get_one::<String>("csv").map(|s| s.trim());
        let source = match (db, csv) {
            (Some(_), Some(_)) => bail!("Use either --db or --csv, not both"),
            (_, Some(path)) => SourceConfig::Csv { path: path.into() },
            (Some(path), None) => SourceConfig::Sqlite { path: path.into() },
            (None, None) => SourceConfig::Sqlite {
                path: default_db_path()?,
            },
        };

        let mut insights = InsightsConfig::default();
        if let Some(ccy) = m.get_one::<String>("currency") {
            insights.currency = ccy.trim().to_uppercase();
        }
        Ok(Self { source, insights })
    }

    pub fn open_source(&self) -> Box<dyn TransactionSource> {
        match &self.source {
            SourceConfig::Sqlite { path } => Box::new(SqliteSource::open(path.clone())),
            SourceConfig::Csv { path } => Box::new(CsvSource::new(path.clone())),
        }
    }
}
