// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use ledgerlens::{cli, commands, config::Config, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let matches = cli::build_cli().get_matches();

    let config = Config::from_matches(&matches)?;
    let source = config.open_source();

    match matches.subcommand() {
        Some(("insights", sub)) => {
            commands::insights::handle(source.as_ref(), &config.insights, sub)?
        }
        Some(("report", sub)) => {
            commands::reports::handle(source.as_ref(), &config.insights, sub)?
        }
        Some(("doctor", _)) => commands::doctor::handle(source.as_ref())?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
