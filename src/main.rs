// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use moneta::accounts::AccountLedger;
use moneta::categories::CategoryRegistry;
use moneta::config::{self, Config};
use moneta::session::Session;
use moneta::{cli, commands};

fn main() -> Result<()> {
    config::init_tracing();
    let matches = cli::build_cli().get_matches();

    let cfg = Config::from_matches(&matches);
    let store = cfg.open_store()?;
    let mut session = Session::demo();

    match matches.subcommand() {
        Some(("init", _)) => {
            let accounts = AccountLedger::new(&store).list()?;
            let categories = CategoryRegistry::new(&store).list()?;
            if store.is_available() {
                println!(
                    "Database initialized at {} ({} accounts, {} categories)",
                    cfg.resolved_db_path()?.display(),
                    accounts.len(),
                    categories.len()
                );
            } else {
                println!("Running without persistence; nothing to initialize");
            }
        }
        Some(("account", sub)) => commands::accounts::handle(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, &mut session, sub)?,
        Some(("stats", sub)) => commands::reports::handle(&session, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut session, sub)?,
        Some(("alert", sub)) => commands::alerts::handle(&mut session, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store, &session)?,
        Some(("reset", sub)) => commands::reset::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
