// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Named JSON collections in a local key-value namespace.
//!
//! Each collection is stored whole under its key and every write replaces the
//! previous value. A [`Store`] without a backing connection behaves like a
//! context with no local storage at all: reads come back empty and writes are
//! dropped.

use crate::db;
use crate::errors::{MonetaError, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const ACCOUNTS_KEY: &str = "moneta_accounts";
pub const CATEGORIES_KEY: &str = "moneta_categories";

/// An entity kept in a collection, keyed by a string id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const ENTITY: &'static str;

    fn id(&self) -> &str;
}

pub struct Store {
    conn: Option<Connection>,
}

impl Store {
    pub fn new(conn: Connection) -> Result<Self> {
        db::init_schema(&conn)?;
        Ok(Self { conn: Some(conn) })
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    pub fn unavailable() -> Self {
        Self { conn: None }
    }

    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(MonetaError::PersistenceUnavailable)
    }

    pub fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let Some(conn) = &self.conn else {
            return Ok(None);
        };
        let v = conn
            .query_row(
                "SELECT value FROM storage WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    /// `None` when nothing is stored under `key`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        match self.read_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| MonetaError::Parse {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Returns the stored collection, or persists and returns `seed` on a miss.
    pub fn read_or_seed<T: Serialize + DeserializeOwned + Clone>(
        &self,
        key: &str,
        seed: &[T],
    ) -> Result<Vec<T>> {
        if !self.is_available() {
            return Ok(Vec::new());
        }
        if let Some(items) = self.read(key)? {
            return Ok(items);
        }
        tracing::debug!(key, count = seed.len(), "seeding collection");
        self.write(key, seed)?;
        Ok(seed.to_vec())
    }

    pub fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let Some(conn) = &self.conn else {
            tracing::debug!(key, "no persistence; write dropped");
            return Ok(());
        };
        let json = serde_json::to_string(items).map_err(MonetaError::Serialize)?;
        conn.execute(
            "INSERT INTO storage(key, value, updated_at) VALUES(?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
            params![key, json],
        )?;
        tracing::debug!(key, count = items.len(), "collection written");
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let conn = self.connection()?;
        let n = conn.execute("DELETE FROM storage WHERE key=?1", params![key])?;
        Ok(n > 0)
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        let Some(conn) = &self.conn else {
            return Ok(Vec::new());
        };
        let mut stmt = conn.prepare("SELECT key FROM storage ORDER BY key")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

/// A typed view over one key of a [`Store`], with its seed.
pub struct Collection<'s, T> {
    store: &'s Store,
    key: &'static str,
    seed: fn() -> Vec<T>,
}

impl<'s, T: Record> Collection<'s, T> {
    pub fn new(store: &'s Store, key: &'static str, seed: fn() -> Vec<T>) -> Self {
        Self { store, key, seed }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn all(&self) -> Result<Vec<T>> {
        self.store.read_or_seed(self.key, &(self.seed)())
    }

    pub fn save(&self, items: &[T]) -> Result<()> {
        self.store.write(self.key, items)
    }

    pub fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.all()?.into_iter().find(|r| r.id() == id))
    }

    pub fn push(&self, item: T) -> Result<T> {
        let mut items = self.all()?;
        items.push(item.clone());
        self.save(&items)?;
        Ok(item)
    }

    /// Applies `f` to the record with `id`. Returns `false`, leaving the
    /// collection untouched, when no record has that id.
    pub fn modify(&self, id: &str, f: impl FnOnce(&mut T)) -> Result<bool> {
        let mut items = self.all()?;
        let Some(item) = items.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!(entity = T::ENTITY, id, "update skipped; no such id");
            return Ok(false);
        };
        f(item);
        self.save(&items)?;
        Ok(true)
    }

    pub fn remove(&self, id: &str) -> Result<bool> {
        let items = self.all()?;
        let before = items.len();
        let kept: Vec<T> = items.into_iter().filter(|r| r.id() != id).collect();
        if kept.len() == before {
            tracing::debug!(entity = T::ENTITY, id, "delete skipped; no such id");
            return Ok(false);
        }
        self.save(&kept)?;
        Ok(true)
    }
}

/// Millisecond timestamp, bumped past any id already present.
pub fn next_id<T: Record>(items: &[T]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    let max_numeric = items
        .iter()
        .filter_map(|r| r.id().parse::<i64>().ok())
        .max();
    if let Some(max) = max_numeric {
        if candidate <= max {
            candidate = max + 1;
        }
    }
    let mut id = candidate.to_string();
    while items.iter().any(|r| r.id() == id) {
        candidate += 1;
        id = candidate.to_string();
    }
    id
}

/// Finds the single record whose name is `name`.
pub fn resolve_by_name<T: Record>(
    items: Vec<T>,
    name: &str,
    name_of: impl Fn(&T) -> &str,
) -> Result<T> {
    let mut hits = items.into_iter().filter(|r| name_of(r) == name);
    match (hits.next(), hits.next()) {
        (Some(one), None) => Ok(one),
        (Some(_), Some(_)) => Err(MonetaError::AmbiguousName {
            entity: T::ENTITY,
            name: name.to_string(),
        }),
        (None, _) => Err(MonetaError::not_found(T::ENTITY, name)),
    }
}
