// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneta::accounts::AccountLedger;
use moneta::commands::{accounts, alerts, categories, doctor, reset, transactions};
use moneta::models::{AccountType, NewAccount, TransactionType};
use moneta::session::Session;
use moneta::store::{ACCOUNTS_KEY, Store};
use moneta::{MonetaError, cli};
use rusqlite::params;
use rust_decimal_macros::dec;

fn setup() -> Store {
    Store::in_memory().unwrap()
}

fn sub_matches(args: &[&str]) -> (String, clap::ArgMatches) {
    let mut full = vec!["moneta"];
    full.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(full);
    let (name, m) = matches.subcommand().expect("subcommand");
    (name.to_string(), m.clone())
}

#[test]
fn account_add_then_update_through_cli() {
    let store = setup();
    let (_, m) = sub_matches(&[
        "account", "add", "--name", "Poupança", "--type", "savings", "--balance", "100.50",
        "--currency", "brl",
    ]);
    accounts::handle(&store, &m).unwrap();

    let ledger = AccountLedger::new(&store);
    let created = ledger.find_by_name("Poupança").unwrap();
    assert_eq!(created.kind, AccountType::Savings);
    assert_eq!(created.balance, dec!(100.50));
    assert_eq!(created.currency, "BRL");
    assert_eq!(created.color, "#6C63FF");

    let (_, m) = sub_matches(&["account", "update", "--id", &created.id, "--balance", "-42"]);
    accounts::handle(&store, &m).unwrap();
    let updated = ledger.get(&created.id).unwrap().unwrap();
    assert_eq!(updated.balance, dec!(-42));
    assert_eq!(updated.name, "Poupança");
}

#[test]
fn account_rm_unknown_id_reports_not_found() {
    let store = setup();
    let (_, m) = sub_matches(&["account", "rm", "--id", "404"]);
    let err = accounts::handle(&store, &m).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MonetaError>(),
        Some(MonetaError::NotFound { .. })
    ));
    assert_eq!(AccountLedger::new(&store).list().unwrap().len(), 2);
}

#[test]
fn account_add_with_blank_name_fails() {
    let store = setup();
    let (_, m) = sub_matches(&["account", "add", "--name", "  "]);
    let err = accounts::handle(&store, &m).unwrap_err();
    assert!(err.to_string().contains("name is required"));
}

#[test]
fn category_update_unknown_id_reports_not_found() {
    let store = setup();
    let (_, m) = sub_matches(&["category", "update", "--id", "x", "--name", "Pets"]);
    let err = categories::handle(&store, &m).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn tx_add_resolves_names_and_signs_amount() {
    let store = setup();
    let mut session = Session::empty();
    let (_, m) = sub_matches(&[
        "tx",
        "add",
        "--description",
        "Geladeira",
        "--amount",
        "300",
        "--category",
        "Compras",
        "--account",
        "Cartão de Crédito",
        "--date",
        "2025-01-20",
        "--installments",
        "3",
    ]);
    transactions::handle(&store, &mut session, &m).unwrap();

    let txs = session.transactions();
    assert_eq!(txs.len(), 3);
    assert!(txs.iter().all(|t| t.kind == TransactionType::Expense));
    assert!(txs.iter().all(|t| t.amount == dec!(-100)));
    assert_eq!(txs[1].date.to_string(), "2025-02-20");
    assert_eq!(txs[1].description, "Geladeira (2/3)");
}

#[test]
fn tx_add_rejects_ambiguous_account_name() {
    let store = setup();
    AccountLedger::new(&store)
        .add(NewAccount {
            name: "Conta Principal".into(),
            kind: AccountType::Checking,
            balance: dec!(0),
            currency: "BRL".into(),
            color: "#FF6B6B".into(),
        })
        .unwrap();
    let mut session = Session::empty();
    let (_, m) = sub_matches(&["tx", "add", "--description", "Pix", "--amount", "10"]);
    let err = transactions::handle(&store, &mut session, &m).unwrap_err();
    assert!(matches!(
        err.root_cause().downcast_ref::<MonetaError>(),
        Some(MonetaError::AmbiguousName { .. })
    ));
    assert!(session.transactions().is_empty());
}

#[test]
fn signed_amount_follows_type() {
    assert_eq!(
        transactions::signed_amount("-25", TransactionType::Income).unwrap(),
        dec!(25)
    );
    assert_eq!(
        transactions::signed_amount("25", TransactionType::Expense).unwrap(),
        dec!(-25)
    );
}

#[test]
fn alert_toggle_unknown_id_fails() {
    let mut session = Session::demo();
    let (_, m) = sub_matches(&["alert", "toggle", "--id", "9"]);
    assert!(alerts::handle(&mut session, &m).is_err());
    let (_, m) = sub_matches(&["alert", "toggle", "--id", "3"]);
    alerts::handle(&mut session, &m).unwrap();
    assert_eq!(session.active_alert_count(), 4);
}

#[test]
fn doctor_is_clean_on_fresh_store() {
    let store = setup();
    let issues = doctor::diagnose(&store, &Session::demo()).unwrap();
    assert!(issues.is_empty(), "{:?}", issues);
}

#[test]
fn doctor_reports_parse_errors_and_duplicates() {
    let store = setup();
    let conn = store.connection().unwrap();
    conn.execute(
        "INSERT INTO storage(key, value) VALUES(?1, '[1, 2')",
        params![ACCOUNTS_KEY],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO storage(key, value) VALUES('moneta_categories', ?1)",
        params![
            r##"[{"id":"1","name":"Casa","icon":"🏠","color":"#FFFFFF"},{"id":"1","name":"Casa","icon":"🏠","color":"#FFFFFF"}]"##
        ],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO storage(key, value) VALUES('legacy', '[]')",
        [],
    )
    .unwrap();

    let issues = doctor::diagnose(&store, &Session::empty()).unwrap();
    let kinds: Vec<&str> = issues.iter().map(|(k, _)| k.as_str()).collect();
    assert!(kinds.contains(&"parse_error"));
    assert!(kinds.contains(&"duplicate_id"));
    assert!(kinds.contains(&"ambiguous_name"));
    assert!(kinds.contains(&"unknown_key"));
}

#[test]
fn doctor_reports_dangling_transaction_references() {
    let store = setup();
    AccountLedger::new(&store).delete("2").unwrap();
    let issues = doctor::diagnose(&store, &Session::demo()).unwrap();
    let dangling = issues
        .iter()
        .filter(|(k, _)| k == "dangling_account")
        .count();
    assert_eq!(dangling, 2);
}

#[test]
fn doctor_flags_missing_persistence() {
    let issues = doctor::diagnose(&Store::unavailable(), &Session::demo()).unwrap();
    assert_eq!(issues[0].0, "persistence_unavailable");
}

#[test]
fn reset_restores_defaults_on_next_read() {
    let store = setup();
    let ledger = AccountLedger::new(&store);
    ledger.delete("1").unwrap();
    assert_eq!(ledger.list().unwrap().len(), 1);

    let (_, m) = sub_matches(&["reset", "--accounts"]);
    reset::handle(&store, &m).unwrap();
    assert_eq!(ledger.list().unwrap().len(), 2);
}

#[test]
fn reset_without_persistence_fails() {
    let (_, m) = sub_matches(&["reset"]);
    let err = reset::handle(&Store::unavailable(), &m).unwrap_err();
    assert!(matches!(
        err.root_cause().downcast_ref::<MonetaError>(),
        Some(MonetaError::PersistenceUnavailable)
    ));
}

#[test]
fn global_flags_parse_anywhere() {
    let matches =
        cli::build_cli().get_matches_from(["moneta", "account", "list", "--ephemeral"]);
    let cfg = moneta::config::Config::from_matches(&matches);
    assert!(cfg.ephemeral);
}
