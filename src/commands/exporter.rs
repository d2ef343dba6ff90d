// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg;
use crate::commands::transactions::filter_from;
use crate::models::Transaction;
use crate::session::Session;
use crate::utils::format_currency;
use anyhow::{Context, Result};
use std::io::Write;

pub const CSV_HEADER: [&str; 6] = ["Data", "Categoria", "Descrição", "Valor", "Tipo", "Conta"];

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let out = arg(sub, "out")?;
    let filter = filter_from(sub)?;
    let txs = filter.apply(session.transactions());

    let file = std::fs::File::create(out).with_context(|| format!("Create {}", out))?;
    write_transactions_csv(file, &txs)?;
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}

/// Semicolon-separated, one header row, amounts formatted as BRL.
pub fn write_transactions_csv<W: Write>(w: W, txs: &[&Transaction]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(w);
    wtr.write_record(CSV_HEADER)?;
    for t in txs {
        wtr.write_record([
            t.date.to_string(),
            t.category.clone(),
            t.description.clone(),
            format_currency(t.amount, "BRL"),
            t.kind.label().to_string(),
            t.account.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
