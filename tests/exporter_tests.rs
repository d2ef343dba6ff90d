// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneta::commands::exporter::{self, write_transactions_csv};
use moneta::session::{Session, TransactionFilter};
use moneta::utils::format_currency;
use moneta::{cli, models::TransactionType};
use rust_decimal_macros::dec;
use tempfile::tempdir;

#[test]
fn formats_brazilian_currency() {
    assert_eq!(format_currency(dec!(5495), "BRL"), "R$ 5.495,00");
    assert_eq!(format_currency(dec!(-320), "BRL"), "-R$ 320,00");
    assert_eq!(format_currency(dec!(1234567.891), "BRL"), "R$ 1.234.567,89");
    assert_eq!(format_currency(dec!(0.005), "BRL"), "R$ 0,01");
    assert_eq!(format_currency(dec!(-0.001), "BRL"), "R$ 0,00");
    assert_eq!(format_currency(dec!(99.9), "USD"), "US$ 99,90");
    assert_eq!(format_currency(dec!(10), "CHF"), "CHF 10,00");
}

#[test]
fn csv_has_header_and_one_row_per_transaction() {
    let session = Session::demo();
    let filter = TransactionFilter {
        kind: Some(TransactionType::Income),
        ..Default::default()
    };
    let txs = filter.apply(session.transactions());

    let mut buf = Vec::new();
    write_transactions_csv(&mut buf, &txs).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Data;Categoria;Descrição;Valor;Tipo;Conta",
            "2025-01-15;Salário;Salário Mensal;R$ 5.000,00;Receita;Conta Principal",
        ]
    );
}

#[test]
fn expenses_export_as_despesa_with_negative_value() {
    let session = Session::demo();
    let txs: Vec<_> = session.transactions().iter().skip(1).take(1).collect();
    let mut buf = Vec::new();
    write_transactions_csv(&mut buf, &txs).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.ends_with(
        "2025-01-14;Alimentação;Compras no Mercado;-R$ 150,00;Despesa;Conta Principal\n"
    ));
}

#[test]
fn export_command_writes_filtered_file() {
    let session = Session::demo();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("transacoes.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "moneta",
        "tx",
        "export",
        "--out",
        &out_str,
        "--category",
        "Alimentação",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("export", export_m)) = tx_m.subcommand() {
            exporter::handle(&session, export_m).unwrap();
        } else {
            panic!("no export subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.contains("Restaurante;-R$ 60,00;Despesa;Cartão de Crédito"));
}

#[test]
fn export_rejects_unknown_type_filter() {
    let session = Session::demo();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("x.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "moneta", "tx", "export", "--out", &out_str, "--type", "transfer",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("export", export_m)) = tx_m.subcommand() else {
        panic!("no export subcommand");
    };
    assert!(exporter::handle(&session, export_m).is_err());
    assert!(!out_path.exists());
}
