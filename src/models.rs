// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::{MonetaError, Result};
use crate::store::Record;
use crate::utils::{is_currency_code, is_hex_color};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY_ICON: &str = "📁";
pub const DEFAULT_COLOR: &str = "#6C63FF";

fn require_name(entity: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MonetaError::validation(format!("{} name is required", entity)));
    }
    Ok(())
}

fn require_color(color: &str) -> Result<()> {
    if !is_hex_color(color) {
        return Err(MonetaError::validation(format!(
            "Invalid color '{}', expected #RRGGBB",
            color
        )));
    }
    Ok(())
}

fn require_currency(ccy: &str) -> Result<()> {
    if !is_currency_code(ccy) {
        return Err(MonetaError::validation(format!(
            "Invalid currency '{}', expected a three-letter ISO code",
            ccy
        )));
    }
    Ok(())
}

// ── Accounts ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    Savings,
    CreditCard,
    Investment,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::CreditCard => "credit_card",
            Self::Investment => "investment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Conta Corrente",
            Self::Savings => "Conta Poupança",
            Self::CreditCard => "Cartão de Crédito",
            Self::Investment => "Investimento",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            "credit_card" | "credit" => Ok(Self::CreditCard),
            "investment" => Ok(Self::Investment),
            other => Err(MonetaError::validation(format!(
                "Unknown account type '{}'",
                other
            ))),
        }
    }

    pub fn all() -> &'static [AccountType] {
        &[
            Self::Checking,
            Self::Savings,
            Self::CreditCard,
            Self::Investment,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
    pub currency: String,
    pub color: String,
}

impl Record for Account {
    const ENTITY: &'static str = "Account";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Account fields before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub kind: AccountType,
    pub balance: Decimal,
    pub currency: String,
    pub color: String,
}

impl NewAccount {
    pub fn validate(&self) -> Result<()> {
        require_name("Account", &self.name)?;
        require_currency(&self.currency)?;
        require_color(&self.color)
    }

    pub fn with_id(self, id: String) -> Account {
        Account {
            id,
            name: self.name,
            kind: self.kind,
            balance: self.balance,
            currency: self.currency,
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub kind: Option<AccountType>,
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
    pub color: Option<String>,
}

impl AccountPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_name("Account", name)?;
        }
        if let Some(ccy) = &self.currency {
            require_currency(ccy)?;
        }
        if let Some(color) = &self.color {
            require_color(color)?;
        }
        Ok(())
    }

    pub fn apply(self, account: &mut Account) {
        if let Some(v) = self.name {
            account.name = v;
        }
        if let Some(v) = self.kind {
            account.kind = v;
        }
        if let Some(v) = self.balance {
            account.balance = v;
        }
        if let Some(v) = self.currency {
            account.currency = v;
        }
        if let Some(v) = self.color {
            account.color = v;
        }
    }
}

// ── Categories ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Record for Category {
    const ENTITY: &'static str = "Category";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl NewCategory {
    pub fn validate(&self) -> Result<()> {
        require_name("Category", &self.name)?;
        require_color(&self.color)
    }

    pub fn with_id(self, id: String) -> Category {
        let icon = if self.icon.trim().is_empty() {
            DEFAULT_CATEGORY_ICON.to_string()
        } else {
            self.icon
        };
        Category {
            id,
            name: self.name,
            icon,
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_name("Category", name)?;
        }
        if let Some(color) = &self.color {
            require_color(color)?;
        }
        Ok(())
    }

    pub fn apply(self, category: &mut Category) {
        if let Some(v) = self.name {
            category.name = v;
        }
        if let Some(v) = self.icon.filter(|i| !i.trim().is_empty()) {
            category.icon = v;
        }
        if let Some(v) = self.color {
            category.color = v;
        }
    }
}

// ── Transactions ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" | "renda" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            other => Err(MonetaError::validation(format!(
                "Unknown transaction type '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub account: String,
}

impl Record for Transaction {
    const ENTITY: &'static str = "Transaction";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionType,
    pub account: String,
}

impl NewTransaction {
    /// Income must not be negative and expenses must not be positive.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(MonetaError::validation("Transaction description is required"));
        }
        match self.kind {
            TransactionType::Income if self.amount < Decimal::ZERO => {
                Err(MonetaError::validation(format!(
                    "Income amount must not be negative, got {}",
                    self.amount
                )))
            }
            TransactionType::Expense if self.amount > Decimal::ZERO => {
                Err(MonetaError::validation(format!(
                    "Expense amount must not be positive, got {}",
                    self.amount
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn with_id(self, id: String) -> Transaction {
        Transaction {
            id,
            date: self.date,
            category: self.category,
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            account: self.account,
        }
    }
}

// ── Goals ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub target: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub current: Decimal,
    pub deadline: NaiveDate,
    pub color: String,
}

impl Record for Goal {
    const ENTITY: &'static str = "Goal";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Goal {
    /// Unclamped percentage of `target` reached.
    pub fn progress(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.current / self.target * Decimal::ONE_HUNDRED
    }

    pub fn display_progress(&self) -> Decimal {
        self.progress().clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    pub fn is_completed(&self) -> bool {
        self.progress() >= Decimal::ONE_HUNDRED
    }

    pub fn remaining(&self) -> Decimal {
        (self.target - self.current).max(Decimal::ZERO)
    }

    /// Whole days until the deadline; zero or less means overdue.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    pub deadline: NaiveDate,
    pub color: String,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        require_name("Goal", &self.name)?;
        if self.target <= Decimal::ZERO {
            return Err(MonetaError::validation(format!(
                "Goal target must be positive, got {}",
                self.target
            )));
        }
        Ok(())
    }

    pub fn with_id(self, id: String) -> Goal {
        Goal {
            id,
            name: self.name,
            target: self.target,
            current: self.current,
            deadline: self.deadline,
            color: self.color,
        }
    }
}

// ── Alerts ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Inactive,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub condition: String,
    pub status: AlertStatus,
}

impl Record for Alert {
    const ENTITY: &'static str = "Alert";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }

    pub fn toggle(&mut self) {
        self.status = self.status.toggled();
    }
}
