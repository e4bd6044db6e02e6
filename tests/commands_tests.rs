// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerlens::commands::{doctor, insights, reports};
use ledgerlens::config::{Config, InsightsConfig, SourceConfig};
use ledgerlens::insights::Insights;
use ledgerlens::models::{Kind, Transaction};
use ledgerlens::{cli, source::TransactionSource};
use rust_decimal::Decimal;
use std::path::PathBuf;

fn tx(date: &str, category: &str, amount: i64, kind: Kind) -> Transaction {
    Transaction {
        id: 0,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        description: String::new(),
        category: Some(category.to_string()),
        amount: Decimal::from(amount),
        kind,
    }
}

fn ledger() -> Vec<Transaction> {
    vec![
        tx("2024-11-02", "Rent", 300, Kind::Expense),
        tx("2024-11-20", "Food", 100, Kind::Expense),
        tx("2024-12-02", "Rent", 300, Kind::Expense),
        tx("2024-12-24", "Gifts", 300, Kind::Expense),
        tx("2024-12-01", "Salary", 2000, Kind::Income),
    ]
}

#[test]
fn config_reads_global_flags() {
    let matches = cli::build_cli().get_matches_from([
        "ledgerlens",
        "insights",
        "--csv",
        " export.csv ",
        "--currency",
        "inr",
    ]);
    let cfg = Config::from_matches(&matches).unwrap();
    assert_eq!(
        cfg.source,
        SourceConfig::Csv {
            path: PathBuf::from("export.csv")
        }
    );
    assert_eq!(cfg.insights.currency, "INR");
    assert_eq!(cfg.insights.transition_steps, 30);
}

#[test]
fn config_prefers_explicit_db_path() {
    let matches =
        cli::build_cli().get_matches_from(["ledgerlens", "--db", "/tmp/l.sqlite", "doctor"]);
    let cfg = Config::from_matches(&matches).unwrap();
    assert_eq!(
        cfg.source,
        SourceConfig::Sqlite {
            path: PathBuf::from("/tmp/l.sqlite")
        }
    );
}

#[test]
fn category_rows_rank_and_share() {
    let insights = Insights::compute(&ledger(), &InsightsConfig::default());
    let rows = reports::category_rows(&insights);
    let names: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(names, vec!["Rent", "Gifts", "Food"]);
    assert_eq!(rows[0].spent, Decimal::from(600));
    assert_eq!(rows[0].share_percent, Decimal::from(60));
    assert_eq!(rows[1].share_percent, Decimal::from(30));
    assert_eq!(rows[2].share_percent, Decimal::from(10));
}

#[test]
fn monthly_rows_append_the_forecast_month() {
    let insights = Insights::compute(&ledger(), &InsightsConfig::default());
    let rows = reports::monthly_rows(&insights);
    let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
    assert_eq!(months, vec!["2024-11", "2024-12", "2025-01"]);
    assert_eq!(rows[2].point, reports::Point::Forecast);
    // 400 -> 600, next 800
    assert_eq!(rows[2].expense, Decimal::from(800));
}

#[test]
fn totals_cover_both_sides_of_the_ledger() {
    let mut txs = ledger();
    txs.push(Transaction {
        date: None,
        ..tx("2024-12-30", "Refund", 50, Kind::Income)
    });
    let insights = Insights::compute(&txs, &InsightsConfig::default());
    assert_eq!(insights.totals.income, Decimal::from(2050));
    assert_eq!(insights.totals.expense, Decimal::from(1000));
    assert_eq!(insights.totals.net, Decimal::from(1050));
    assert_eq!(
        serde_json::to_value(insights.totals).unwrap(),
        serde_json::json!({ "income": "2050", "expense": "1000", "net": "1050" })
    );
}

#[test]
fn category_share_survives_huge_amounts() {
    let huge: Decimal = "30000000000000000000000000000".parse().unwrap();
    let txs = vec![
        Transaction {
            amount: huge,
            ..tx("2024-11-02", "Fleet", 0, Kind::Expense)
        },
        Transaction {
            amount: huge,
            ..tx("2024-11-03", "Hangar", 0, Kind::Expense)
        },
    ];
    let insights = Insights::compute(&txs, &InsightsConfig::default());
    let rows = reports::category_rows(&insights);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.share_percent == Decimal::from(50)));
}

#[test]
fn handlers_run_against_any_source() {
    let source: Box<dyn TransactionSource> = Box::new(ledger());
    let cfg = InsightsConfig::default();

    let matches =
        cli::build_cli().get_matches_from(["ledgerlens", "insights", "--steps", "3", "--json"]);
    if let Some(("insights", sub)) = matches.subcommand() {
        insights::handle(source.as_ref(), &cfg, sub).unwrap();
    } else {
        panic!("no insights subcommand");
    }

    for name in ["categories", "daily", "monthly", "totals"] {
        let matches = cli::build_cli().get_matches_from(["ledgerlens", "report", name]);
        if let Some(("report", sub)) = matches.subcommand() {
            reports::handle(source.as_ref(), &cfg, sub).unwrap();
        } else {
            panic!("no report subcommand");
        }
    }

    doctor::handle(source.as_ref()).unwrap();
}

#[test]
fn animate_plays_to_the_forecast() {
    let source: Box<dyn TransactionSource> = Box::new(ledger());
    let cfg = InsightsConfig {
        frame_interval: std::time::Duration::ZERO,
        ..InsightsConfig::default()
    };
    let matches =
        cli::build_cli().get_matches_from(["ledgerlens", "insights", "--animate", "--steps", "5"]);
    if let Some(("insights", sub)) = matches.subcommand() {
        insights::handle(source.as_ref(), &cfg, sub).unwrap();
    } else {
        panic!("no insights subcommand");
    }
}
