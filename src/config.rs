// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::store::Store;
use anyhow::Result;
use std::path::PathBuf;

pub const DB_ENV: &str = "MONETA_DB";
pub const LOG_FORMAT_ENV: &str = "MONETA_LOG_FORMAT";

/// Where the collections live for this session.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub db_path: Option<PathBuf>,
    pub ephemeral: bool,
}

impl Config {
    /// `--db` wins over `MONETA_DB`; clap folds the env var into the same arg.
    pub fn from_matches(m: &clap::ArgMatches) -> Self {
        Self {
            db_path: m.get_one::<String>("db").map(PathBuf::from),
            ephemeral: m.get_flag("ephemeral"),
        }
    }

    pub fn resolved_db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(p) => Ok(p.clone()),
            None => db::default_db_path(),
        }
    }

    pub fn open_store(&self) -> Result<Store> {
        if self.ephemeral {
            tracing::warn!("running without persistence; changes will not be saved");
            return Ok(Store::unavailable());
        }
        let path = self.resolved_db_path()?;
        Ok(Store::new(db::open_or_init(&path)?)?)
    }
}

pub fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let log_format = std::env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
