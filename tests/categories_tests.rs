// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneta::MonetaError;
use moneta::categories::CategoryRegistry;
use moneta::models::{CategoryPatch, DEFAULT_CATEGORY_ICON, NewCategory};
use moneta::store::{CATEGORIES_KEY, Store};

fn setup() -> Store {
    Store::in_memory().unwrap()
}

#[test]
fn seeds_eight_categories_in_order() {
    let store = setup();
    let names = CategoryRegistry::new(&store).names().unwrap();
    assert_eq!(
        names,
        [
            "Alimentação",
            "Transporte",
            "Entretenimento",
            "Compras",
            "Contas",
            "Saúde",
            "Salário",
            "Investimentos"
        ]
    );
    assert!(store.read_raw(CATEGORIES_KEY).unwrap().is_some());
}

#[test]
fn add_defaults_blank_icon() {
    let store = setup();
    let registry = CategoryRegistry::new(&store);
    let cat = registry
        .add(NewCategory {
            name: "Supermercado".into(),
            icon: "  ".into(),
            color: "#6C63FF".into(),
        })
        .unwrap();
    assert_eq!(cat.icon, DEFAULT_CATEGORY_ICON);
    assert_eq!(registry.list().unwrap().len(), 9);
    assert_eq!(registry.get(&cat.id).unwrap().unwrap(), cat);
}

#[test]
fn add_rejects_blank_name() {
    let store = setup();
    let err = CategoryRegistry::new(&store)
        .add(NewCategory {
            name: "".into(),
            icon: "🐶".into(),
            color: "#6C63FF".into(),
        })
        .unwrap_err();
    assert!(matches!(err, MonetaError::Validation(_)));
}

#[test]
fn update_and_delete() {
    let store = setup();
    let registry = CategoryRegistry::new(&store);
    assert!(registry
        .update(
            "3",
            CategoryPatch {
                name: Some("Lazer".into()),
                ..Default::default()
            },
        )
        .unwrap());
    let cat = registry.get("3").unwrap().unwrap();
    assert_eq!(cat.name, "Lazer");
    assert_eq!(cat.icon, "🎮");

    assert!(!registry.update("99", CategoryPatch::default()).unwrap());

    assert!(registry.delete("3").unwrap());
    assert!(registry.get("3").unwrap().is_none());
    assert!(!registry.delete("3").unwrap());
    assert_eq!(registry.list().unwrap().len(), 7);
}

#[test]
fn find_by_name_resolves_single_category() {
    let store = setup();
    let registry = CategoryRegistry::new(&store);
    assert_eq!(registry.find_by_name("Saúde").unwrap().id, "6");
    assert!(matches!(
        registry.find_by_name("saúde").unwrap_err(),
        MonetaError::NotFound { .. }
    ));
}
