// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for the ledger core.
//!
//! Command handlers and the binary work in `anyhow`; everything below the
//! command layer returns [`MonetaError`] so callers can match on the kind.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MonetaError>;

#[derive(Error, Debug)]
pub enum MonetaError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Stored value under '{key}' is not a valid collection: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No local persistence is available")]
    PersistenceUnavailable,

    #[error("{entity} name '{name}' matches more than one record")]
    AmbiguousName { entity: &'static str, name: String },

    #[error("Database operation failed: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl MonetaError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
