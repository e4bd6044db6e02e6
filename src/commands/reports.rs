// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::load;
use crate::config::InsightsConfig;
use crate::insights::Insights;
use crate::source::TransactionSource;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(
    source: &dyn TransactionSource,
    cfg: &InsightsConfig,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(source, cfg, sub)?,
        Some(("daily", sub)) => daily(source, cfg, sub)?,
        Some(("monthly", sub)) => monthly(source, cfg, sub)?,
        Some(("totals", sub)) => totals(source, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    pub spent: Decimal,
    pub share_percent: Decimal,
}

pub fn category_rows(insights: &Insights) -> Vec<CategoryRow> {
    let total = insights.categories.total().ok();
    insights
        .categories
        .ranked()
        .into_iter()
        .map(|(category, spent)| CategoryRow {
            share_percent: total.map_or(Decimal::ZERO, |t| share(spent, t)),
            category,
            spent,
        })
        .collect()
}

/// `part` as a percentage of `whole`, rounded to cents; zero when undefined.
fn share(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .or_else(|| part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED))
        .map_or(Decimal::ZERO, |p| p.round_dp(2))
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Point {
    Actual,
    Forecast,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MonthlyRow {
    pub month: String,
    pub expense: Decimal,
    pub point: Point,
}

/// Observed months followed by the forecast month, when there is one.
pub fn monthly_rows(insights: &Insights) -> Vec<MonthlyRow> {
    let mut rows: Vec<MonthlyRow> = insights
        .monthly
        .iter()
        .map(|m| MonthlyRow {
            month: m.month.to_string(),
            expense: m.total,
            point: Point::Actual,
        })
        .collect();
    if let Some(next) = insights.report.forecast_month {
        rows.push(MonthlyRow {
            month: next.to_string(),
            expense: insights.report.predicted_next,
            point: Point::Forecast,
        });
    }
    rows
}

fn categories(
    source: &dyn TransactionSource,
    cfg: &InsightsConfig,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let Some(insights) = load(source, cfg) else {
        return Ok(());
    };
    let rows = category_rows(&insights);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    format!("{:.2}", r.spent.round_dp(2)),
                    format!("{:.1}%", r.share_percent.round_dp(1)),
                ]
            })
            .collect();
        let hdr = format!("Spent ({})", cfg.currency);
        println!("{}", pretty_table(&["Category", &hdr, "Share"], data));
    }
    Ok(())
}

fn daily(
    source: &dyn TransactionSource,
    cfg: &InsightsConfig,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let Some(insights) = load(source, cfg) else {
        return Ok(());
    };
    let rows = insights.daily.rows();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.date.to_string(),
                    format!("{:.2}", r.income.round_dp(2)),
                    format!("{:.2}", r.expense.round_dp(2)),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Income", "Expense"], data));
    }
    Ok(())
}

fn monthly(
    source: &dyn TransactionSource,
    cfg: &InsightsConfig,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let Some(insights) = load(source, cfg) else {
        return Ok(());
    };
    let rows = monthly_rows(&insights);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                let month = match r.point {
                    Point::Actual => r.month.clone(),
                    Point::Forecast => format!("{} (forecast)", r.month),
                };
                vec![month, format!("{:.2}", r.expense.round_dp(2))]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Expense"], data));
    }
    Ok(())
}

fn totals(
    source: &dyn TransactionSource,
    cfg: &InsightsConfig,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let Some(insights) = load(source, cfg) else {
        return Ok(());
    };
    let t = insights.totals;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        let data = [("Income", t.income), ("Expense", t.expense), ("Net", t.net)]
            .into_iter()
            .map(|(label, amt)| vec![label.to_string(), fmt_money(&amt, &cfg.currency)])
            .collect();
        println!("{}", pretty_table(&["Total", "Amount"], data));
    }
    Ok(())
}
