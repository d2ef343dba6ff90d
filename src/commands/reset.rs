// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{ACCOUNTS_KEY, CATEGORIES_KEY, Store};
use anyhow::{Context, Result};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let accounts = m.get_flag("accounts");
    let categories = m.get_flag("categories");
    let keys: Vec<&str> = match (accounts, categories) {
        (true, false) => vec![ACCOUNTS_KEY],
        (false, true) => vec![CATEGORIES_KEY],
        _ => vec![ACCOUNTS_KEY, CATEGORIES_KEY],
    };
    for key in keys {
        let removed = store
            .remove(key)
            .with_context(|| format!("Reset {}", key))?;
        if removed {
            println!("Cleared {}; defaults will be restored on next read", key);
        } else {
            println!("{} was not stored", key);
        }
    }
    Ok(())
}
