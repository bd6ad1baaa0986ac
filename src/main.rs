// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use spendlens::config::{Settings, data_dir};
use spendlens::store::{Ledger, RecordSet, Sources};
use spendlens::{cli, commands};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn sources(dir: &std::path::Path, m: &clap::ArgMatches) -> Sources {
    let mut s = Sources::in_dir(dir);
    let flag = |name: &str| m.get_one::<PathBuf>(name).cloned();
    if let Some(p) = flag("expenses") {
        s.expenses = Some(p);
    }
    if let Some(p) = flag("income") {
        s.income = Some(p);
    }
    if let Some(p) = flag("savings") {
        s.savings = Some(p);
    }
    if let Some(p) = flag("categories") {
        s.categories = Some(p);
    }
    s
}

fn main() -> Result<()> {
    init_logging();
    let matches = cli::build_cli().get_matches();

    let dir = data_dir(matches.get_one::<PathBuf>("data-dir").map(PathBuf::as_path))?;
    let mut settings = Settings::load(&dir)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            let path = Settings::path(&dir);
            if !path.exists() {
                settings.save(&dir)?;
            }
            println!("Data directory ready at {}", dir.display());
        }
        Some(("settings", sub)) => commands::settings::handle(&dir, &mut settings, sub)?,
        Some(("doctor", sub)) => {
            let records = RecordSet::load(&sources(&dir, &matches))?;
            commands::doctor::handle(&records, sub)?;
        }
        Some((name, sub)) => {
            let ledger = Ledger::load(&sources(&dir, &matches))?;
            match name {
                "report" => commands::reports::handle(&ledger, &settings, sub)?,
                "tx" => commands::transactions::handle(&ledger, &settings, sub)?,
                "category" => commands::categories::handle(&ledger, &settings, sub)?,
                "export" => commands::exporter::handle(&ledger, &settings, sub)?,
                _ => {}
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
