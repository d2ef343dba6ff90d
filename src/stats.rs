// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures computed on read. Nothing here touches storage.

use crate::errors::{MonetaError, Result};
use crate::models::{Account, Alert, NewTransaction, Transaction};
use crate::utils::{add_months, round_money};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub const MAX_INSTALLMENTS: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthlyStats {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub expenses: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

pub fn monthly_stats(txs: &[Transaction]) -> MonthlyStats {
    let income: Decimal = txs.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let expenses = txs
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum::<Decimal>()
        .abs();
    MonthlyStats {
        income,
        expenses,
        balance: income - expenses,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
}

/// Expense magnitude per category, in order of each category's first expense.
pub fn category_distribution(txs: &[Transaction]) -> Vec<CategorySlice> {
    let mut out: Vec<CategorySlice> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for t in txs.iter().filter(|t| t.is_expense()) {
        match index.get(t.category.as_str()) {
            Some(&i) => out[i].value += t.abs_amount(),
            None => {
                index.insert(&t.category, out.len());
                out.push(CategorySlice {
                    name: t.category.clone(),
                    value: t.abs_amount(),
                });
            }
        }
    }
    out
}

pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|a| a.balance).sum()
}

pub fn active_alert_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| a.is_active()).count()
}

fn check_installment_count(count: u32) -> Result<()> {
    if count == 0 || count > MAX_INSTALLMENTS {
        return Err(MonetaError::validation(format!(
            "Installment count must be between 1 and {}, got {}",
            MAX_INSTALLMENTS, count
        )));
    }
    Ok(())
}

/// `total / count` rounded to cents. The remainder is not redistributed.
pub fn installment_amount(total: Decimal, count: u32) -> Result<Decimal> {
    check_installment_count(count)?;
    Ok(round_money(total / Decimal::from(count)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentPlan {
    pub per_installment: Decimal,
    pub items: Vec<NewTransaction>,
    /// `total - Σ items`; non-zero when the total does not split evenly.
    pub drift: Decimal,
}

/// Spreads `base` over `count` consecutive months starting at `base.date`.
///
/// Each line item carries `per_installment` and a `(n/count)` suffix on the
/// description. A single installment is returned unchanged, unrounded.
pub fn installment_split(base: &NewTransaction, count: u32) -> Result<InstallmentPlan> {
    let per_installment = installment_amount(base.amount, count)?;
    if count == 1 {
        return Ok(InstallmentPlan {
            per_installment: base.amount,
            items: vec![base.clone()],
            drift: Decimal::ZERO,
        });
    }

    let mut items = Vec::with_capacity(count as usize);
    for i in 0..count {
        let date = add_months(base.date, i).ok_or_else(|| {
            MonetaError::validation(format!("Installment {} falls outside the calendar", i + 1))
        })?;
        items.push(NewTransaction {
            date,
            description: format!("{} ({}/{})", base.description, i + 1, count),
            amount: per_installment,
            ..base.clone()
        });
    }
    let allocated: Decimal = items.iter().map(|t| t.amount).sum();
    Ok(InstallmentPlan {
        per_installment,
        items,
        drift: base.amount - allocated,
    })
}
