// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::Result;
use crate::models::{Account, AccountPatch, AccountType, NewAccount};
use crate::store::{ACCOUNTS_KEY, Collection, Store, next_id, resolve_by_name};
use rust_decimal::Decimal;

pub fn default_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "1".into(),
            name: "Conta Principal".into(),
            kind: AccountType::Checking,
            balance: Decimal::from(5495),
            currency: "BRL".into(),
            color: "#6C63FF".into(),
        },
        Account {
            id: "2".into(),
            name: "Cartão de Crédito".into(),
            kind: AccountType::CreditCard,
            balance: Decimal::from(-320),
            currency: "BRL".into(),
            color: "#00E676".into(),
        },
    ]
}

/// CRUD over the `moneta_accounts` collection.
pub struct AccountLedger<'s> {
    items: Collection<'s, Account>,
}

impl<'s> AccountLedger<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self {
            items: Collection::new(store, ACCOUNTS_KEY, default_accounts),
        }
    }

    pub fn list(&self) -> Result<Vec<Account>> {
        self.items.all()
    }

    pub fn get(&self, id: &str) -> Result<Option<Account>> {
        self.items.get(id)
    }

    pub fn add(&self, fields: NewAccount) -> Result<Account> {
        fields.validate()?;
        let existing = self.items.all()?;
        let account = fields.with_id(next_id(&existing));
        tracing::info!(id = %account.id, name = %account.name, "account added");
        self.items.push(account)
    }

    /// Merges `patch` into the account with `id`; `false` if there is none.
    pub fn update(&self, id: &str, patch: AccountPatch) -> Result<bool> {
        patch.validate()?;
        self.items.modify(id, |a| patch.apply(a))
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.items.remove(id)
    }

    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|a| a.name).collect())
    }

    pub fn total_balance(&self) -> Result<Decimal> {
        Ok(crate::stats::total_balance(&self.list()?))
    }

    /// Resolves a display name to exactly one account.
    pub fn find_by_name(&self, name: &str) -> Result<Account> {
        resolve_by_name(self.list()?, name, |a| &a.name)
    }
}
