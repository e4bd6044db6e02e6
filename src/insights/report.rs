// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::aggregate::{CategoryTotals, category_totals};
use super::checked_sum;
use super::forecast::predict_next;
use super::series::{DailySeries, MonthKey, MonthlySeries, daily_series, monthly_series};
use super::totals::{Totals, totals};
use super::transition::Transition;
use super::trend::{self, Trend};
use crate::config::InsightsConfig;
use crate::error::{FetchError, InsightError};
use crate::models::Transaction;
use crate::source::TransactionSource;
use crate::utils::{fmt_money, fmt_percent};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DataStatus {
    Ready,
    /// No dated expenses to analyze; numeric fields are zero.
    InsufficientData,
    LoadFailed { message: String },
    /// Amounts too large to sum or extrapolate exactly; numeric fields are zero.
    Overflow { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightReport {
    pub months_tracked: usize,
    pub average_monthly_expense: Decimal,
    pub growth_percent: Option<Decimal>,
    pub trend: Trend,
    pub predicted_next: Decimal,
    pub forecast_month: Option<MonthKey>,
    pub status: DataStatus,
    pub narrative: Vec<String>,
}

impl InsightReport {
    fn empty(status: DataStatus) -> Self {
        Self {
            months_tracked: 0,
            average_monthly_expense: Decimal::ZERO,
            growth_percent: Some(Decimal::ZERO),
            trend: Trend::Stable,
            predicted_next: Decimal::ZERO,
            forecast_month: None,
            status,
            narrative: Vec::new(),
        }
    }
}

/// Everything derived from one snapshot. Nothing here outlives a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub report: InsightReport,
    pub totals: Totals,
    pub categories: CategoryTotals,
    pub daily: DailySeries,
    pub monthly: MonthlySeries,
}

impl Insights {
    /// Derives every view from the snapshot. Amounts too large to add up
    /// exactly yield an empty `Overflow` result.
    pub fn compute(txs: &[Transaction], cfg: &InsightsConfig) -> Self {
        match Self::try_compute(txs, cfg) {
            Ok(insights) => insights,
            Err(e) => {
                tracing::warn!(error = %e, "amounts out of range");
                Self::cleared(
                    DataStatus::Overflow {
                        message: e.to_string(),
                    },
                    format!("Amounts are too large to analyze: {}", e),
                )
            }
        }
    }

    pub fn try_compute(txs: &[Transaction], cfg: &InsightsConfig) -> Result<Self, InsightError> {
        let totals = totals(txs)?;
        let categories = category_totals(txs)?;
        let daily = daily_series(txs)?;
        let monthly = monthly_series(txs)?;

        let values = monthly.values();
        let mut report = match predict_next(&values) {
            Ok(predicted_next) => {
                let months = Decimal::from(values.len());
                let growth = trend::analyze(&monthly)?;
                let spent = checked_sum(values.iter().copied(), "average")?;
                InsightReport {
                    months_tracked: values.len(),
                    average_monthly_expense: spent / months,
                    growth_percent: growth.percent,
                    trend: growth.trend,
                    predicted_next,
                    forecast_month: monthly.last().map(|m| m.month.next()),
                    status: DataStatus::Ready,
                    narrative: Vec::new(),
                }
            }
            Err(e @ InsightError::InsufficientData { .. }) => {
                tracing::debug!(error = %e, "no monthly expenses to forecast");
                InsightReport::empty(DataStatus::InsufficientData)
            }
            Err(e) => return Err(e),
        };
        report.narrative = narrative(&report, &categories, cfg);

        Ok(Self {
            report,
            totals,
            categories,
            daily,
            monthly,
        })
    }

    pub fn load_failed(err: &FetchError) -> Self {
        Self::cleared(
            DataStatus::LoadFailed {
                message: err.to_string(),
            },
            format!("Could not load data: {}", err),
        )
    }

    fn cleared(status: DataStatus, line: String) -> Self {
        let mut report = InsightReport::empty(status);
        report.narrative = vec![line];
        Self {
            report,
            totals: Totals::default(),
            categories: CategoryTotals::default(),
            daily: DailySeries::default(),
            monthly: MonthlySeries::default(),
        }
    }

    /// Interpolation from the last observed month to the forecast.
    pub fn transition(&self, steps: usize) -> Option<Transition> {
        if self.report.status != DataStatus::Ready {
            return None;
        }
        let last = self.monthly.last()?;
        Some(Transition::new(last.total, self.report.predicted_next, steps))
    }
}

/// Takes a fresh snapshot and derives everything from it. Fetch failures
/// produce an empty `LoadFailed` result instead of an error.
pub fn refresh<S>(source: &S, cfg: &InsightsConfig) -> Insights
where
    S: TransactionSource + ?Sized,
{
    match source.fetch_all() {
        Ok(txs) => {
            tracing::info!(transactions = txs.len(), "computing insights");
            Insights::compute(&txs, cfg)
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load transactions");
            Insights::load_failed(&e)
        }
    }
}

fn narrative(
    report: &InsightReport,
    categories: &CategoryTotals,
    cfg: &InsightsConfig,
) -> Vec<String> {
    let ccy = cfg.currency.as_str();
    match &report.status {
        DataStatus::InsufficientData => {
            return vec!["Not enough data for insights yet. Add some expenses!".to_string()];
        }
        DataStatus::LoadFailed { message } => {
            return vec![format!("Could not load data: {}", message)];
        }
        DataStatus::Overflow { message } => {
            return vec![format!("Amounts are too large to analyze: {}", message)];
        }
        DataStatus::Ready => {}
    }

    let mut lines = vec![
        format!("Months tracked: {}", report.months_tracked),
        format!(
            "Average monthly expense: {}",
            fmt_money(&report.average_monthly_expense, ccy)
        ),
    ];

    let trend_line = match (report.trend, report.growth_percent) {
        _ if report.months_tracked < 2 => {
            "Only one month tracked so far; a trend needs two.".to_string()
        }
        (Trend::Increased, Some(p)) => {
            format!("Your expenses increased by {} last month.", fmt_percent(&p))
        }
        (Trend::Decreased, Some(p)) => {
            format!("Your expenses decreased by {} last month.", fmt_percent(&p.abs()))
        }
        (Trend::Decreased, None) => {
            "Last month's expenses net below zero after a month with none; check for refunds \
             or negative amounts."
                .to_string()
        }
        (Trend::NewSpending, _) => {
            "You started spending again last month after a month with none.".to_string()
        }
        _ => "Your spending was stable last month.".to_string(),
    };
    lines.push(trend_line);

    if let Some(month) = report.forecast_month {
        lines.push(format!(
            "Prediction: you might spend around {} in {} if current trends continue.",
            fmt_money(&report.predicted_next, ccy),
            month
        ));
    }

    let top = categories.top(cfg.top_categories);
    if !top.is_empty() {
        let names: Vec<String> = top
            .iter()
            .map(|(label, amt)| format!("{} ({})", label, fmt_money(amt, ccy)))
            .collect();
        lines.push(format!(
            "Tip: review your top categories weekly: {}.",
            names.join(", ")
        ));
    }
    lines
}
