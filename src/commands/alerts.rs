// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg;
use crate::errors::MonetaError;
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), session.alerts())? {
                let data = session
                    .alerts()
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.clone(),
                            a.kind.clone(),
                            a.condition.clone(),
                            a.status.as_str().to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{} active\n{}",
                    session.active_alert_count(),
                    pretty_table(&["ID", "Type", "Condition", "Status"], data)
                );
            }
        }
        Some(("add", sub)) => {
            let alert = session.add_alert(arg(sub, "type")?, arg(sub, "condition")?)?;
            println!("Created alert {} ({})", alert.id, alert.kind);
        }
        Some(("toggle", sub)) => {
            let id = arg(sub, "id")?;
            let status = session
                .toggle_alert(id)
                .ok_or_else(|| MonetaError::not_found("Alert", id))?;
            println!("Alert {} is now {}", id, status.as_str());
        }
        _ => {}
    }
    Ok(())
}
