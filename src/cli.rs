// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::DB_ENV;
use crate::models::DEFAULT_COLOR;
use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn opt(name: &'static str) -> Arg {
    Arg::new(name).long(name)
}

fn req(name: &'static str) -> Arg {
    Arg::new(name).long(name).required(true)
}

fn id_arg() -> Arg {
    req("id").help("Record id")
}

fn tx_filters(cmd: Command) -> Command {
    cmd.arg(opt("search").help("Substring of description or category (case-insensitive)"))
        .arg(opt("category").help("Exact category name"))
        .arg(opt("type").help("income | expense"))
}

fn account_cmd() -> Command {
    Command::new("account")
        .about("Manage accounts")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List accounts")))
        .subcommand(
            Command::new("add")
                .about("Add an account")
                .arg(req("name"))
                .arg(
                    opt("type")
                        .default_value("checking")
                        .help("checking | savings | credit_card | investment"),
                )
                .arg(opt("balance").default_value("0").allow_hyphen_values(true))
                .arg(opt("currency").default_value("BRL"))
                .arg(opt("color").default_value(DEFAULT_COLOR)),
        )
        .subcommand(
            Command::new("update")
                .about("Change fields of an account")
                .arg(id_arg())
                .arg(opt("name"))
                .arg(opt("type"))
                .arg(opt("balance").allow_hyphen_values(true))
                .arg(opt("currency"))
                .arg(opt("color")),
        )
        .subcommand(Command::new("rm").about("Delete an account").arg(id_arg()))
        .subcommand(Command::new("names").about("List account names"))
        .subcommand(Command::new("total").about("Total balance across accounts"))
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage categories")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List categories")))
        .subcommand(
            Command::new("add")
                .about("Add a category")
                .arg(req("name"))
                .arg(opt("icon").default_value(""))
                .arg(opt("color").default_value(DEFAULT_COLOR)),
        )
        .subcommand(
            Command::new("update")
                .about("Change fields of a category")
                .arg(id_arg())
                .arg(opt("name"))
                .arg(opt("icon"))
                .arg(opt("color")),
        )
        .subcommand(Command::new("rm").about("Delete a category").arg(id_arg()))
        .subcommand(Command::new("names").about("List category names"))
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Session transactions")
        .subcommand_required(true)
        .subcommand(json_flags(tx_filters(
            Command::new("list").about("List transactions"),
        )))
        .subcommand(
            Command::new("add")
                .about("Record a transaction, optionally split into monthly installments")
                .arg(req("description"))
                .arg(req("amount").allow_hyphen_values(true))
                .arg(opt("type").default_value("expense"))
                .arg(opt("category"))
                .arg(opt("account").default_value("Conta Principal"))
                .arg(opt("date").help("YYYY-MM-DD, defaults to today"))
                .arg(
                    opt("installments")
                        .default_value("1")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(tx_filters(
            Command::new("export")
                .about("Export transactions as semicolon-separated CSV")
                .arg(req("out")),
        ))
}

fn stats_cmd() -> Command {
    Command::new("stats")
        .about("Derived statistics over session transactions")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("monthly").about("Income, expenses and balance")))
        .subcommand(json_flags(
            Command::new("categories").about("Expense distribution by category"),
        ))
        .subcommand(json_flags(Command::new("history").about("Monthly balance history")))
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Savings goals")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List goals with progress")))
        .subcommand(
            Command::new("add")
                .about("Create a goal")
                .arg(req("name"))
                .arg(req("target"))
                .arg(opt("current").default_value("0"))
                .arg(req("deadline"))
                .arg(opt("color").default_value("bg-primary")),
        )
}

fn alert_cmd() -> Command {
    Command::new("alert")
        .about("Alert records")
        .subcommand_required(true)
        .subcommand(json_flags(Command::new("list").about("List alerts")))
        .subcommand(
            Command::new("add")
                .about("Create an alert")
                .arg(req("type"))
                .arg(req("condition")),
        )
        .subcommand(Command::new("toggle").about("Flip active/inactive").arg(id_arg()))
}

pub fn build_cli() -> Command {
    Command::new("moneta")
        .about("Local personal finance ledger")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_name("PATH")
                .help("SQLite file holding the collections"),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Run without local persistence"),
        )
        .subcommand(Command::new("init").about("Create the database and seed collections"))
        .subcommand(account_cmd())
        .subcommand(category_cmd())
        .subcommand(tx_cmd())
        .subcommand(stats_cmd())
        .subcommand(goal_cmd())
        .subcommand(alert_cmd())
        .subcommand(Command::new("doctor").about("Check stored collections for problems"))
        .subcommand(
            Command::new("reset")
                .about("Drop stored collections so they re-seed on next read")
                .arg(Arg::new("accounts").long("accounts").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("categories")
                        .long("categories")
                        .action(ArgAction::SetTrue),
                ),
        )
}
