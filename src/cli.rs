// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Command, arg, value_parser};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print pretty JSON instead of a table"))
        .arg(arg!(--jsonl "Print one JSON document per line").conflicts_with("json"))
}

pub fn build_cli() -> Command {
    Command::new("ledgerlens")
        .version(clap::crate_version!())
        .about("Spending insights, trends and next-month forecasts over a ledger")
        .arg(arg!(--db <PATH> "Ledger SQLite database (opened read-only)").global(true))
        .arg(
            arg!(--csv <PATH> "Read transactions from a CSV export instead")
                .global(true)
                .conflicts_with("db"),
        )
        .arg(arg!(--currency <CCY> "Currency label used in summaries").global(true))
        .subcommand(output_flags(
            Command::new("insights")
                .about("Trend, average and forecast summary")
                .arg(
                    arg!(--steps <N> "Frames in the forecast animation")
                        .value_parser(value_parser!(usize)),
                )
                .arg(arg!(--animate "Play the transition toward the forecast")),
        ))
        .subcommand(
            Command::new("report")
                .about("Derived series")
                .subcommand(output_flags(
                    Command::new("categories").about("Expenses by category, largest first"),
                ))
                .subcommand(output_flags(
                    Command::new("daily").about("Income vs expense per day"),
                ))
                .subcommand(output_flags(
                    Command::new("monthly").about("Monthly expenses with the forecast month"),
                ))
                .subcommand(output_flags(
                    Command::new("totals").about("Overall income, expense and net"),
                )),
        )
        .subcommand(Command::new("doctor").about("Check the ledger snapshot for data issues"))
}
