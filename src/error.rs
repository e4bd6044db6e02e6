// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failure while reading a transaction snapshot from a source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightError {
    #[error("insufficient data: need at least {needed} point(s), got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("amounts too large: overflow while computing {0}")]
    Overflow(&'static str),
}
