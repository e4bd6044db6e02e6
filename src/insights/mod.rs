// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spending analytics over a transaction snapshot: category totals, daily and
//! monthly series, month-over-month trend, a linear forecast, and the
//! interpolated sequence used to animate it.

use crate::error::InsightError;
use rust_decimal::Decimal;

pub mod aggregate;
pub mod forecast;
pub mod playback;
pub mod report;
pub mod series;
pub mod totals;
pub mod transition;
pub mod trend;

pub use aggregate::{CategoryTotals, UNCATEGORIZED, category_totals};
pub use forecast::{LinearFit, linear_fit, predict_next};
pub use playback::Playback;
pub use report::{DataStatus, InsightReport, Insights, refresh};
pub use series::{
    DailyRow, DailySeries, MonthKey, MonthTotal, MonthlySeries, daily_series, monthly_series,
};
pub use totals::{Totals, totals};
pub use transition::{Transition, TransitionIter};
pub use trend::{Growth, Trend};

/// Adds `amount` into `slot`, reporting overflow instead of panicking.
pub(crate) fn accumulate(
    slot: &mut Decimal,
    amount: Decimal,
    what: &'static str,
) -> Result<(), InsightError> {
    *slot = slot
        .checked_add(amount)
        .ok_or(InsightError::Overflow(what))?;
    Ok(())
}

pub(crate) fn checked_sum<I>(values: I, what: &'static str) -> Result<Decimal, InsightError>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v).ok_or(InsightError::Overflow(what))
    })
}
