// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg;
use crate::models::NewGoal;
use crate::session::Session;
use crate::utils::{format_currency, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some(("add", sub)) => {
            let goal = session.add_goal(NewGoal {
                name: arg(sub, "name")?.to_string(),
                target: parse_decimal(arg(sub, "target")?)?,
                current: parse_decimal(arg(sub, "current")?)?,
                deadline: parse_date(arg(sub, "deadline")?)?,
                color: arg(sub, "color")?.to_string(),
            })?;
            println!(
                "Created goal '{}' ({:.1}% of {})",
                goal.name,
                goal.display_progress(),
                format_currency(goal.target, "BRL")
            );
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct GoalRow {
    pub id: String,
    pub name: String,
    pub current: String,
    pub target: String,
    pub progress: String,
    pub completed: bool,
    pub days_left: i64,
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let data: Vec<GoalRow> = session
        .goals()
        .iter()
        .map(|g| GoalRow {
            id: g.id.clone(),
            name: g.name.clone(),
            current: format_currency(g.current, "BRL"),
            target: format_currency(g.target, "BRL"),
            progress: format!("{:.1}%", g.progress()),
            completed: g.is_completed(),
            days_left: g.days_left(today),
        })
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows = data
        .into_iter()
        .map(|r| {
            let due = if r.days_left > 0 {
                format!("{} dias restantes", r.days_left)
            } else {
                "Prazo vencido".to_string()
            };
            let status = if r.completed { "Concluída" } else { "" };
            vec![r.id, r.name, r.current, r.target, r.progress, due, status.into()]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Goal", "Current", "Target", "Progress", "Deadline", "Status"],
            rows
        )
    );
    Ok(())
}
