// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, opt_arg};
use crate::accounts::AccountLedger;
use crate::categories::CategoryRegistry;
use crate::models::{NewTransaction, TransactionType};
use crate::session::{Session, TransactionFilter};
use crate::store::Store;
use crate::utils::{format_currency, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use chrono::Local;

pub fn handle(store: &Store, session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some(("add", sub)) => add(store, session, sub)?,
        Some(("export", sub)) => crate::commands::exporter::handle(session, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn filter_from(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    Ok(TransactionFilter {
        search: opt_arg(sub, "search").filter(|s| !s.is_empty()),
        category: opt_arg(sub, "category").filter(|s| !s.is_empty() && s != "all"),
        kind: opt_arg(sub, "type")
            .filter(|s| !s.is_empty() && s != "all")
            .map(|t| TransactionType::parse(&t))
            .transpose()?,
    })
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let filter = filter_from(sub)?;
    let txs = filter.apply(session.transactions());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &txs)? {
        return Ok(());
    }
    let rows = txs
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.category.clone(),
                t.description.clone(),
                format_currency(t.amount, "BRL"),
                t.kind.label().to_string(),
                t.account.clone(),
            ]
        })
        .collect();
    println!(
        "Transactions ({})\n{}",
        txs.len(),
        pretty_table(
            &["Date", "Category", "Description", "Amount", "Type", "Account"],
            rows
        )
    );
    Ok(())
}

/// Amounts are entered as magnitudes; the sign follows the transaction type.
pub fn signed_amount(raw: &str, kind: TransactionType) -> Result<rust_decimal::Decimal> {
    let magnitude = parse_decimal(raw)?.abs();
    Ok(match kind {
        TransactionType::Income => magnitude,
        TransactionType::Expense => -magnitude,
    })
}

fn add(store: &Store, session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let kind = TransactionType::parse(arg(sub, "type")?)?;
    let amount = signed_amount(arg(sub, "amount")?, kind)?;
    let date = match opt_arg(sub, "date") {
        Some(d) => parse_date(&d)?,
        None => Local::now().date_naive(),
    };
    let mut account = arg(sub, "account")?.to_string();
    let mut category = opt_arg(sub, "category").unwrap_or_default();

    // Names are resolved against the stored records so a typo or a duplicate
    // name is reported here instead of producing a dangling reference.
    if store.is_available() {
        account = AccountLedger::new(store)
            .find_by_name(&account)
            .with_context(|| format!("Resolve account '{}'", account))?
            .name;
        if !category.is_empty() {
            category = CategoryRegistry::new(store)
                .find_by_name(&category)
                .with_context(|| format!("Resolve category '{}'", category))?
                .name;
        }
    }

    let fields = NewTransaction {
        date,
        category,
        description: arg(sub, "description")?.to_string(),
        amount,
        kind,
        account,
    };
    let count = *sub.get_one::<u32>("installments").unwrap_or(&1);
    if count > 1 {
        let (plan, created) = session.add_installments(fields, count)?;
        for t in &created {
            println!(
                "Recorded {} on {} '{}' (acct: {})",
                format_currency(t.amount, "BRL"),
                t.date,
                t.description,
                t.account
            );
        }
        println!(
            "{}x de {}",
            count,
            format_currency(plan.per_installment.abs(), "BRL")
        );
        if !plan.drift.is_zero() {
            println!(
                "Note: installments differ from the total by {}",
                format_currency(plan.drift, "BRL")
            );
        }
    } else {
        let t = session.add_transaction(fields)?;
        println!(
            "Recorded {} on {} '{}' (acct: {})",
            format_currency(t.amount, "BRL"),
            t.date,
            t.description,
            t.account
        );
    }
    Ok(())
}
