// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod doctor;
pub mod insights;
pub mod reports;

use crate::config::InsightsConfig;
use crate::insights::{DataStatus, Insights, refresh};
use crate::source::TransactionSource;

/// Refreshes from `source`. A failed load or out-of-range amounts are reported
/// on stderr and yield `None`.
pub(crate) fn load(source: &dyn TransactionSource, cfg: &InsightsConfig) -> Option<Insights> {
    let insights = refresh(source, cfg);
    match &insights.report.status {
        DataStatus::LoadFailed { message } => {
            eprintln!("Could not load data: {}", message);
            None
        }
        DataStatus::Overflow { message } => {
            eprintln!("Amounts are too large to analyze: {}", message);
            None
        }
        DataStatus::Ready | DataStatus::InsufficientData => Some(insights),
    }
}
