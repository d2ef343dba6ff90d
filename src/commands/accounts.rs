// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, opt_arg};
use crate::accounts::AccountLedger;
use crate::errors::MonetaError;
use crate::models::{AccountPatch, AccountType, NewAccount};
use crate::store::Store;
use crate::utils::{format_currency, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let ledger = AccountLedger::new(store);
    match m.subcommand() {
        Some(("list", sub)) => list(&ledger, sub)?,
        Some(("add", sub)) => add(&ledger, sub)?,
        Some(("update", sub)) => update(&ledger, sub)?,
        Some(("rm", sub)) => {
            let id = arg(sub, "id")?;
            if !ledger.delete(id)? {
                return Err(MonetaError::not_found("Account", id).into());
            }
            println!("Removed account {}", id);
        }
        Some(("names", _)) => {
            for name in ledger.names()? {
                println!("{}", name);
            }
        }
        Some(("total", _)) => {
            let total = ledger.total_balance()?;
            println!("Total balance: {}", format_currency(total, "BRL"));
        }
        _ => {}
    }
    Ok(())
}

fn list(ledger: &AccountLedger, sub: &clap::ArgMatches) -> Result<()> {
    let accounts = ledger.list()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &accounts)? {
        return Ok(());
    }
    let rows = accounts
        .iter()
        .map(|a| {
            vec![
                a.id.clone(),
                a.name.clone(),
                a.kind.label().to_string(),
                format_currency(a.balance, &a.currency),
                a.currency.clone(),
                a.color.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Name", "Type", "Balance", "CCY", "Color"], rows)
    );
    Ok(())
}

fn add(ledger: &AccountLedger, sub: &clap::ArgMatches) -> Result<()> {
    let fields = NewAccount {
        name: arg(sub, "name")?.to_string(),
        kind: AccountType::parse(arg(sub, "type")?)?,
        balance: parse_decimal(arg(sub, "balance")?)?,
        currency: arg(sub, "currency")?.trim().to_uppercase(),
        color: arg(sub, "color")?.trim().to_string(),
    };
    let account = ledger.add(fields)?;
    println!(
        "Added account '{}' ({}, {}) with id {}",
        account.name,
        account.kind.as_str(),
        format_currency(account.balance, &account.currency),
        account.id
    );
    Ok(())
}

fn update(ledger: &AccountLedger, sub: &clap::ArgMatches) -> Result<()> {
    let id = arg(sub, "id")?;
    let patch = AccountPatch {
        name: sub.get_one::<String>("name").cloned(),
        kind: opt_arg(sub, "type")
            .map(|t| AccountType::parse(&t))
            .transpose()?,
        balance: opt_arg(sub, "balance")
            .map(|b| parse_decimal(&b))
            .transpose()?,
        currency: opt_arg(sub, "currency").map(|c| c.to_uppercase()),
        color: opt_arg(sub, "color"),
    };
    if !ledger.update(id, patch)? {
        return Err(MonetaError::not_found("Account", id).into());
    }
    println!("Updated account {}", id);
    Ok(())
}
