// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month-over-month growth of expenses.

use super::series::MonthlySeries;
use crate::error::InsightError;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increased,
    Decreased,
    Stable,
    /// Spending appeared after a month with none; growth is unbounded.
    NewSpending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Growth {
    /// `None` only when the previous month is zero and growth has no finite value.
    pub percent: Option<Decimal>,
    pub trend: Trend,
}

impl Growth {
    pub const STABLE: Growth = Growth {
        percent: Some(Decimal::ZERO),
        trend: Trend::Stable,
    };
}

pub fn analyze(series: &MonthlySeries) -> Result<Growth, InsightError> {
    growth(&series.values())
}

/// Compares the last two values; anything shorter is stable.
pub fn growth(values: &[Decimal]) -> Result<Growth, InsightError> {
    let [.., prev, last] = values else {
        return Ok(Growth::STABLE);
    };
    let (prev, last) = (*prev, *last);

    if prev.is_zero() {
        return Ok(if last > Decimal::ZERO {
            Growth {
                percent: None,
                trend: Trend::NewSpending,
            }
        } else if last < Decimal::ZERO {
            Growth {
                percent: None,
                trend: Trend::Decreased,
            }
        } else {
            Growth::STABLE
        });
    }

    let percent = percent_change(prev, last).ok_or(InsightError::Overflow("growth"))?;
    let trend = if percent > Decimal::ZERO {
        Trend::Increased
    } else if percent < Decimal::ZERO {
        Trend::Decreased
    } else {
        Trend::Stable
    };
    Ok(Growth {
        percent: Some(percent),
        trend,
    })
}

/// `(last - prev) * 100 / prev`, dividing first when the product would overflow.
fn percent_change(prev: Decimal, last: Decimal) -> Option<Decimal> {
    let diff = last.checked_sub(prev)?;
    diff.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(prev))
        .or_else(|| diff.checked_div(prev)?.checked_mul(Decimal::ONE_HUNDRED))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn fewer_than_two_months_is_stable() {
        assert_eq!(growth(&[]), Ok(Growth::STABLE));
        assert_eq!(growth(&[d(500)]), Ok(Growth::STABLE));
    }

    #[test]
    fn drop_from_100_to_80_is_minus_twenty() {
        let g = growth(&[d(100), d(80)]).unwrap();
        assert_eq!(g.percent, Some(d(-20)));
        assert_eq!(g.trend, Trend::Decreased);
    }

    #[test]
    fn flat_months_are_stable() {
        let g = growth(&[d(100), d(100)]).unwrap();
        assert_eq!(g.percent, Some(Decimal::ZERO));
        assert_eq!(g.trend, Trend::Stable);
    }

    #[test]
    fn only_the_last_two_months_matter() {
        let g = growth(&[d(10), d(1000), d(200), d(250)]).unwrap();
        assert_eq!(g.percent, Some(d(25)));
        assert_eq!(g.trend, Trend::Increased);
    }

    #[test]
    fn zero_baseline_never_divides() {
        let g = growth(&[d(0), d(40)]).unwrap();
        assert_eq!(g.percent, None);
        assert_eq!(g.trend, Trend::NewSpending);
        assert_eq!(growth(&[d(0), d(0)]), Ok(Growth::STABLE));
    }

    #[test]
    fn negative_month_after_zero_is_a_decrease_without_percent() {
        let g = growth(&[d(0), d(-5)]).unwrap();
        assert_eq!(g.percent, None);
        assert_eq!(g.trend, Trend::Decreased);
    }

    #[test]
    fn very_large_months_still_yield_a_percent() {
        let prev: Decimal = "1000000000000000000000000000".parse().unwrap();
        let last: Decimal = "2000000000000000000000000000".parse().unwrap();
        let g = growth(&[prev, last]).unwrap();
        assert_eq!(g.percent, Some(d(100)));
        assert_eq!(g.trend, Trend::Increased);
    }

    #[test]
    fn unrepresentable_difference_is_an_error() {
        assert_eq!(
            growth(&[Decimal::MIN, Decimal::MAX]),
            Err(InsightError::Overflow("growth"))
        );
    }
}
