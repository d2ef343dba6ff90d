// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::{Session, monthly_balance_history};
use crate::stats::{category_distribution, monthly_stats};
use crate::utils::{format_currency, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(session, sub)?,
        Some(("categories", sub)) => categories(session, sub)?,
        Some(("history", sub)) => history(sub)?,
        _ => {}
    }
    Ok(())
}

fn monthly(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let stats = monthly_stats(session.transactions());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stats)? {
        let data = vec![vec![
            format_currency(stats.income, "BRL"),
            format_currency(stats.expenses, "BRL"),
            format_currency(stats.balance, "BRL"),
        ]];
        println!("{}", pretty_table(&["Income", "Expenses", "Balance"], data));
    }
    Ok(())
}

fn categories(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let slices = category_distribution(session.transactions());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &slices)? {
        let data = slices
            .into_iter()
            .map(|s| vec![s.name, format_currency(s.value, "BRL")])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}

fn history(sub: &clap::ArgMatches) -> Result<()> {
    let points = monthly_balance_history();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        let data = points
            .into_iter()
            .map(|p| vec![p.month.to_string(), format_currency(p.balance, "BRL")])
            .collect();
        println!("{}", pretty_table(&["Month", "Balance"], data));
    }
    Ok(())
}
