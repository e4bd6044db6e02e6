// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One-step linear forecast over an evenly spaced series.

use crate::error::InsightError;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinearFit {
    pub slope: Decimal,
    pub intercept: Decimal,
}

impl LinearFit {
    /// Value of the line at `x`; `None` when it leaves the representable range.
    pub fn at(&self, x: usize) -> Option<Decimal> {
        self.slope
            .checked_mul(Decimal::from(x))?
            .checked_add(self.intercept)
    }
}

/// Ordinary least squares over `x = 0..n`. Needs at least two points.
///
/// The denominator `n·Σx² − (Σx)²` is `n²(n²−1)/12`, strictly positive for
/// `n >= 2`, so no further guard is required.
pub fn linear_fit(values: &[Decimal]) -> Result<LinearFit, InsightError> {
    if values.len() < 2 {
        return Err(InsightError::InsufficientData {
            needed: 2,
            got: values.len(),
        });
    }
    fit(values).ok_or(InsightError::Overflow("linear fit"))
}

fn fit(values: &[Decimal]) -> Option<LinearFit> {
    let n = Decimal::from(values.len());
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) =
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
    for (i, y) in values.iter().enumerate() {
        let x = Decimal::from(i);
        sum_x = sum_x.checked_add(x)?;
        sum_y = sum_y.checked_add(*y)?;
        sum_xy = sum_xy.checked_add(x.checked_mul(*y)?)?;
        sum_xx = sum_xx.checked_add(x.checked_mul(x)?)?;
    }
    let numerator = n
        .checked_mul(sum_xy)?
        .checked_sub(sum_x.checked_mul(sum_y)?)?;
    let denominator = n
        .checked_mul(sum_xx)?
        .checked_sub(sum_x.checked_mul(sum_x)?)?;
    let slope = numerator.checked_div(denominator)?;
    let intercept = sum_y
        .checked_sub(slope.checked_mul(sum_x)?)?
        .checked_div(n)?;
    Some(LinearFit { slope, intercept })
}

/// Predicts the value at index `n` for a series of `n` points.
pub fn predict_next(values: &[Decimal]) -> Result<Decimal, InsightError> {
    match values {
        [] => Err(InsightError::InsufficientData { needed: 1, got: 0 }),
        [only] => Ok(*only),
        _ => linear_fit(values)?
            .at(values.len())
            .ok_or(InsightError::Overflow("forecast")),
    }
}
