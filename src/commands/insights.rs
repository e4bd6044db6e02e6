// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::load;
use crate::config::InsightsConfig;
use crate::insights::{Insights, Playback};
use crate::source::TransactionSource;
use crate::utils::{fmt_money, maybe_print_json};
use anyhow::Result;
use rust_decimal::Decimal;
use std::io::Write;

const BAR_WIDTH: usize = 30;

pub fn handle(
    source: &dyn TransactionSource,
    cfg: &InsightsConfig,
    m: &clap::ArgMatches,
) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(steps) = m.get_one::<usize>("steps") {
        cfg.transition_steps = *steps;
    }
    let Some(insights) = load(source, &cfg) else {
        return Ok(());
    };

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &insights.report)? {
        return Ok(());
    }
    for line in &insights.report.narrative {
        println!("{}", line);
    }
    if m.get_flag("animate") {
        animate(&insights, &cfg)?;
    }
    Ok(())
}

pub fn progress_line(label: &str, value: Decimal, progress: f64, ccy: &str) -> String {
    let filled = ((progress.clamp(0.0, 1.0)) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{} [{}{}] {}",
        label,
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        fmt_money(&value, ccy)
    )
}

fn animate(insights: &Insights, cfg: &InsightsConfig) -> Result<()> {
    let (Some(transition), Some(month)) = (
        insights.transition(cfg.transition_steps),
        insights.report.forecast_month,
    ) else {
        return Ok(());
    };
    let label = format!("{} forecast", month);
    let mut out = std::io::stdout().lock();
    let mut io_err = None;
    let mut playback = Playback::new(transition);
    playback.drive(
        |value, progress| {
            let line = progress_line(&label, value, progress, &cfg.currency);
            if let Err(e) = write!(out, "\r{}", line).and_then(|_| out.flush()) {
                io_err.get_or_insert(e);
            }
        },
        || std::thread::sleep(cfg.frame_interval),
    );
    writeln!(out)?;
    if let Some(e) = io_err {
        return Err(e.into());
    }
    Ok(())
}
