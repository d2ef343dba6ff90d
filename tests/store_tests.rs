// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneta::MonetaError;
use moneta::accounts::{AccountLedger, default_accounts};
use moneta::db;
use moneta::models::{Account, AccountType, Category};
use moneta::store::{ACCOUNTS_KEY, CATEGORIES_KEY, Store, resolve_by_name};
use rusqlite::{Connection, params};
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn setup() -> Store {
    Store::new(Connection::open_in_memory().unwrap()).unwrap()
}

fn sample() -> Vec<Account> {
    vec![Account {
        id: "42".into(),
        name: "Reserva".into(),
        kind: AccountType::Savings,
        balance: dec!(1234.56),
        currency: "BRL".into(),
        color: "#4ECDC4".into(),
    }]
}

#[test]
fn write_then_read_is_identity() {
    let store = setup();
    store.write(ACCOUNTS_KEY, &sample()).unwrap();
    let back: Vec<Account> = store.read(ACCOUNTS_KEY).unwrap().unwrap();
    assert_eq!(back, sample());
}

#[test]
fn write_replaces_previous_value() {
    let store = setup();
    store.write(ACCOUNTS_KEY, &default_accounts()).unwrap();
    store.write(ACCOUNTS_KEY, &sample()).unwrap();
    let back: Vec<Account> = store.read(ACCOUNTS_KEY).unwrap().unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].id, "42");
}

#[test]
fn missing_key_reads_as_none() {
    let store = setup();
    let got: Option<Vec<Category>> = store.read(CATEGORIES_KEY).unwrap();
    assert!(got.is_none());
}

#[test]
fn read_or_seed_persists_seed_on_miss() {
    let store = setup();
    let items = store.read_or_seed(ACCOUNTS_KEY, &sample()).unwrap();
    assert_eq!(items, sample());
    assert!(store.read_raw(ACCOUNTS_KEY).unwrap().is_some());
    // A stored collection wins over the seed.
    let again = store.read_or_seed(ACCOUNTS_KEY, &default_accounts()).unwrap();
    assert_eq!(again, sample());
}

#[test]
fn stored_empty_array_is_not_reseeded() {
    let store = setup();
    store.write::<Account>(ACCOUNTS_KEY, &[]).unwrap();
    let items = store.read_or_seed(ACCOUNTS_KEY, &default_accounts()).unwrap();
    assert!(items.is_empty());
}

#[test]
fn decimals_are_stored_as_json_numbers() {
    let store = setup();
    store.write(ACCOUNTS_KEY, &default_accounts()).unwrap();
    let raw = store.read_raw(ACCOUNTS_KEY).unwrap().unwrap();
    assert!(raw.contains(r#""balance":5495"#), "{}", raw);
    assert!(raw.contains(r#""balance":-320"#), "{}", raw);
    assert!(raw.contains(r#""type":"credit_card""#), "{}", raw);
}

#[test]
fn reads_collection_written_by_web_client() {
    let store = setup();
    store
        .connection()
        .unwrap()
        .execute(
            "INSERT INTO storage(key, value) VALUES(?1, ?2)",
            params![
                ACCOUNTS_KEY,
                r##"[{"id":"1736900000000","name":"Nubank","type":"checking","balance":12.5,"currency":"BRL","color":"#FFFFFF"}]"##
            ],
        )
        .unwrap();
    let items: Vec<Account> = store.read(ACCOUNTS_KEY).unwrap().unwrap();
    assert_eq!(items[0].name, "Nubank");
    assert_eq!(items[0].balance, dec!(12.5));
}

#[test]
fn malformed_value_is_a_parse_error() {
    let store = setup();
    store
        .connection()
        .unwrap()
        .execute(
            "INSERT INTO storage(key, value) VALUES(?1, '{not json')",
            params![ACCOUNTS_KEY],
        )
        .unwrap();
    let err = AccountLedger::new(&store).list().unwrap_err();
    assert!(matches!(err, MonetaError::Parse { ref key, .. } if key == ACCOUNTS_KEY));
    // The bad value is left in place, not overwritten by the seed.
    assert_eq!(
        store.read_raw(ACCOUNTS_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn wrong_shape_is_a_parse_error() {
    let store = setup();
    store
        .connection()
        .unwrap()
        .execute(
            "INSERT INTO storage(key, value) VALUES(?1, ?2)",
            params![CATEGORIES_KEY, r#"[{"id":"1","name":"x"}]"#],
        )
        .unwrap();
    let err = store.read::<Category>(CATEGORIES_KEY).unwrap_err();
    assert!(matches!(err, MonetaError::Parse { .. }));
}

#[test]
fn unavailable_store_reads_empty_and_drops_writes() {
    let store = Store::unavailable();
    assert!(!store.is_available());
    store.write(ACCOUNTS_KEY, &sample()).unwrap();
    let items = store.read_or_seed(ACCOUNTS_KEY, &default_accounts()).unwrap();
    assert!(items.is_empty());
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn remove_requires_persistence() {
    let err = Store::unavailable().remove(ACCOUNTS_KEY).unwrap_err();
    assert!(matches!(err, MonetaError::PersistenceUnavailable));

    let store = setup();
    store.write(ACCOUNTS_KEY, &sample()).unwrap();
    assert!(store.remove(ACCOUNTS_KEY).unwrap());
    assert!(!store.remove(ACCOUNTS_KEY).unwrap());
}

#[test]
fn collections_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("moneta.sqlite");
    {
        let store = Store::new(db::open_or_init(&path).unwrap()).unwrap();
        store.write(ACCOUNTS_KEY, &sample()).unwrap();
    }
    let store = Store::new(db::open_or_init(&path).unwrap()).unwrap();
    assert_eq!(store.keys().unwrap(), vec![ACCOUNTS_KEY.to_string()]);
    let back: Vec<Account> = store.read(ACCOUNTS_KEY).unwrap().unwrap();
    assert_eq!(back, sample());
}

#[test]
fn resolve_by_name_works_for_any_record() {
    let cat = |id: &str, name: &str| Category {
        id: id.into(),
        name: name.into(),
        icon: "📁".into(),
        color: "#AA96DA".into(),
    };
    let cats = vec![cat("1", "Casa"), cat("2", "Lazer"), cat("3", "Casa")];

    let found = resolve_by_name(cats.clone(), "Lazer", |c| &c.name).unwrap();
    assert_eq!(found.id, "2");

    let err = resolve_by_name(cats.clone(), "Casa", |c| &c.name).unwrap_err();
    assert!(matches!(err, MonetaError::AmbiguousName { entity: "Category", .. }));

    let err = resolve_by_name(cats, "Viagem", |c| &c.name).unwrap_err();
    assert!(matches!(err, MonetaError::NotFound { .. }));
}
