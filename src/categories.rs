// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::Result;
use crate::models::{Category, CategoryPatch, NewCategory};
use crate::store::{CATEGORIES_KEY, Collection, Store, next_id, resolve_by_name};

pub fn default_categories() -> Vec<Category> {
    [
        ("1", "Alimentação", "🍔", "#FF6B6B"),
        ("2", "Transporte", "🚗", "#4ECDC4"),
        ("3", "Entretenimento", "🎮", "#95E1D3"),
        ("4", "Compras", "🛍️", "#F38181"),
        ("5", "Contas", "📄", "#AA96DA"),
        ("6", "Saúde", "🏥", "#FCBAD3"),
        ("7", "Salário", "💰", "#00E676"),
        ("8", "Investimentos", "📈", "#6C63FF"),
    ]
    .into_iter()
    .map(|(id, name, icon, color)| Category {
        id: id.into(),
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
    })
    .collect()
}

pub struct CategoryRegistry<'s> {
    items: Collection<'s, Category>,
}

impl<'s> CategoryRegistry<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self {
            items: Collection::new(store, CATEGORIES_KEY, default_categories),
        }
    }

    pub fn list(&self) -> Result<Vec<Category>> {
        self.items.all()
    }

    pub fn get(&self, id: &str) -> Result<Option<Category>> {
        self.items.get(id)
    }

    pub fn add(&self, fields: NewCategory) -> Result<Category> {
        fields.validate()?;
        let existing = self.items.all()?;
        let category = fields.with_id(next_id(&existing));
        tracing::info!(id = %category.id, name = %category.name, "category added");
        self.items.push(category)
    }

    pub fn update(&self, id: &str, patch: CategoryPatch) -> Result<bool> {
        patch.validate()?;
        self.items.modify(id, |c| patch.apply(c))
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.items.remove(id)
    }

    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|c| c.name).collect())
    }

    pub fn find_by_name(&self, name: &str) -> Result<Category> {
        resolve_by_name(self.list()?, name, |c| &c.name)
    }
}
