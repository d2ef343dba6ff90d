// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::accounts::default_accounts;
use crate::categories::default_categories;
use crate::errors::MonetaError;
use crate::models::{Account, Category};
use crate::session::Session;
use crate::store::{ACCOUNTS_KEY, CATEGORIES_KEY, Record, Store};
use crate::utils::{is_currency_code, is_hex_color, pretty_table};
use anyhow::Result;
use std::collections::HashSet;

pub fn handle(store: &Store, session: &Session) -> Result<()> {
    let rows = diagnose(store, session)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let data = rows.into_iter().map(|(k, d)| vec![k, d]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], data));
    }
    Ok(())
}

fn load<T: Record>(
    store: &Store,
    key: &str,
    seed: fn() -> Vec<T>,
    issues: &mut Vec<(String, String)>,
) -> Result<Option<Vec<T>>> {
    match store.read::<T>(key) {
        Ok(Some(items)) => Ok(Some(items)),
        Ok(None) => Ok(Some(seed())),
        Err(err @ MonetaError::Parse { .. }) => {
            issues.push(("parse_error".into(), err.to_string()));
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn check_keys<T: Record>(
    items: &[T],
    name_of: impl Fn(&T) -> &str,
    issues: &mut Vec<(String, String)>,
) {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    let mut reported = HashSet::new();
    for item in items {
        if !ids.insert(item.id()) {
            issues.push(("duplicate_id".into(), format!("{} {}", T::ENTITY, item.id())));
        }
        let name = name_of(item);
        if name.trim().is_empty() {
            issues.push(("blank_name".into(), format!("{} {}", T::ENTITY, item.id())));
        } else if !names.insert(name) && reported.insert(name) {
            issues.push(("ambiguous_name".into(), format!("{} '{}'", T::ENTITY, name)));
        }
    }
}

/// Problems found in the stored collections, as `(issue, detail)` pairs.
pub fn diagnose(store: &Store, session: &Session) -> Result<Vec<(String, String)>> {
    let mut issues = Vec::new();
    if !store.is_available() {
        issues.push((
            "persistence_unavailable".into(),
            "collections are not being saved".into(),
        ));
        return Ok(issues);
    }

    for key in store.keys()? {
        if key != ACCOUNTS_KEY && key != CATEGORIES_KEY {
            issues.push(("unknown_key".into(), key));
        }
    }

    let accounts: Option<Vec<Account>> = load(store, ACCOUNTS_KEY, default_accounts, &mut issues)?;
    if let Some(accounts) = &accounts {
        check_keys(accounts, |a| &a.name, &mut issues);
        for a in accounts {
            if !is_currency_code(&a.currency) {
                issues.push(("invalid_currency".into(), format!("{} {}", a.id, a.currency)));
            }
            if !is_hex_color(&a.color) {
                issues.push(("invalid_color".into(), format!("{} {}", a.id, a.color)));
            }
        }
    }

    let categories: Option<Vec<Category>> =
        load(store, CATEGORIES_KEY, default_categories, &mut issues)?;
    if let Some(categories) = &categories {
        check_keys(categories, |c| &c.name, &mut issues);
    }

    for t in session.transactions() {
        if let Some(accounts) = &accounts {
            if !accounts.iter().any(|a| a.name == t.account) {
                issues.push(("dangling_account".into(), format!("tx {} -> '{}'", t.id, t.account)));
            }
        }
        if let Some(categories) = &categories {
            if !t.category.is_empty() && !categories.iter().any(|c| c.name == t.category) {
                issues.push((
                    "dangling_category".into(),
                    format!("tx {} -> '{}'", t.id, t.category),
                ));
            }
        }
    }
    Ok(issues)
}
