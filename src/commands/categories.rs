// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, opt_arg};
use crate::categories::CategoryRegistry;
use crate::errors::MonetaError;
use crate::models::{CategoryPatch, NewCategory};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let registry = CategoryRegistry::new(store);
    match m.subcommand() {
        Some(("list", sub)) => {
            let cats = registry.list()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                let data = cats
                    .into_iter()
                    .map(|c| vec![c.id, c.icon, c.name, c.color])
                    .collect();
                println!("{}", pretty_table(&["ID", "Icon", "Category", "Color"], data));
            }
        }
        Some(("add", sub)) => {
            let cat = registry.add(NewCategory {
                name: arg(sub, "name")?.to_string(),
                icon: arg(sub, "icon")?.trim().to_string(),
                color: arg(sub, "color")?.trim().to_string(),
            })?;
            println!("Added category {} '{}' with id {}", cat.icon, cat.name, cat.id);
        }
        Some(("update", sub)) => {
            let id = arg(sub, "id")?;
            let patch = CategoryPatch {
                name: sub.get_one::<String>("name").cloned(),
                icon: opt_arg(sub, "icon"),
                color: opt_arg(sub, "color"),
            };
            if !registry.update(id, patch)? {
                return Err(MonetaError::not_found("Category", id).into());
            }
            println!("Updated category {}", id);
        }
        Some(("rm", sub)) => {
            let id = arg(sub, "id")?;
            if !registry.delete(id)? {
                return Err(MonetaError::not_found("Category", id).into());
            }
            println!("Removed category {}", id);
        }
        Some(("names", _)) => {
            for name in registry.names()? {
                println!("{}", name);
            }
        }
        _ => {}
    }
    Ok(())
}
