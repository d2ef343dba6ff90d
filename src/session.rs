// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory transactions, goals and alerts for one application session.
//!
//! These sets start from the demo seed and are never written to the store;
//! whoever drives the session owns the [`Session`] value and passes it down.

use crate::errors::{MonetaError, Result};
use crate::models::{
    Alert, AlertStatus, Goal, NewGoal, NewTransaction, Transaction, TransactionType,
};
use crate::stats::{self, InstallmentPlan};
use crate::store::next_id;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn demo_transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};
    [
        ("1", (2025, 1, 15), "Salário", "Salário Mensal", 5000, Income, "Conta Principal"),
        ("2", (2025, 1, 14), "Alimentação", "Compras no Mercado", -150, Expense, "Conta Principal"),
        ("3", (2025, 1, 13), "Transporte", "Corrida de App", -25, Expense, "Conta Principal"),
        ("4", (2025, 1, 12), "Entretenimento", "Assinatura Netflix", -15, Expense, "Conta Principal"),
        ("5", (2025, 1, 11), "Compras", "Compra Online", -80, Expense, "Cartão de Crédito"),
        ("6", (2025, 1, 10), "Contas", "Conta de Luz", -120, Expense, "Conta Principal"),
        ("7", (2025, 1, 9), "Alimentação", "Restaurante", -60, Expense, "Cartão de Crédito"),
        ("8", (2025, 1, 8), "Saúde", "Farmácia", -45, Expense, "Conta Principal"),
    ]
    .into_iter()
    .map(|(id, (y, m, d), category, description, amount, kind, account)| Transaction {
        id: id.into(),
        date: date(y, m, d),
        category: category.into(),
        description: description.into(),
        amount: Decimal::from(amount),
        kind,
        account: account.into(),
    })
    .collect()
}

pub fn demo_goals() -> Vec<Goal> {
    [
        ("1", "Fundo de Emergência", 10000, 6500, (2025, 12, 31), "bg-primary"),
        ("2", "Viagem de Férias", 3000, 1200, (2025, 6, 30), "bg-secondary"),
        ("3", "Novo Notebook", 2000, 1800, (2025, 3, 31), "bg-chart-3"),
        ("4", "Portfólio de Investimentos", 15000, 8500, (2025, 12, 31), "bg-chart-4"),
    ]
    .into_iter()
    .map(|(id, name, target, current, (y, m, d), color)| Goal {
        id: id.into(),
        name: name.into(),
        target: Decimal::from(target),
        current: Decimal::from(current),
        deadline: date(y, m, d),
        color: color.into(),
    })
    .collect()
}

pub fn demo_alerts() -> Vec<Alert> {
    [
        ("1", "Limite de Orçamento", "Gastos com alimentação > R$ 500/mês", AlertStatus::Active),
        ("2", "Saldo Baixo", "Saldo da conta < R$ 1.000", AlertStatus::Active),
        ("3", "Prazo da Meta", "Meta Viagem de Férias se aproximando", AlertStatus::Inactive),
        ("4", "Grande Transação", "Transação única > R$ 500", AlertStatus::Active),
    ]
    .into_iter()
    .map(|(id, kind, condition, status)| Alert {
        id: id.into(),
        kind: kind.into(),
        condition: condition.into(),
        status,
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalancePoint {
    pub month: &'static str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

/// Fixed seven-month balance series shown on the dashboard chart.
pub fn monthly_balance_history() -> Vec<BalancePoint> {
    [
        ("Jul", 3200),
        ("Ago", 3800),
        ("Set", 4200),
        ("Out", 4600),
        ("Nov", 4100),
        ("Dez", 4800),
        ("Jan", 5495),
    ]
    .into_iter()
    .map(|(month, balance)| BalancePoint {
        month,
        balance: Decimal::from(balance),
    })
    .collect()
}

/// Transactions page filter. Empty/`None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        let matches_search = match self.search.as_deref().map(str::to_lowercase) {
            Some(q) if !q.is_empty() => {
                t.description.to_lowercase().contains(&q) || t.category.to_lowercase().contains(&q)
            }
            _ => true,
        };
        let matches_category = self.category.as_deref().is_none_or(|c| t.category == c);
        let matches_kind = self.kind.is_none_or(|k| t.kind == k);
        matches_search && matches_category && matches_kind
    }

    pub fn apply<'a>(&self, txs: &'a [Transaction]) -> Vec<&'a Transaction> {
        txs.iter().filter(|t| self.matches(t)).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
    alerts: Vec<Alert>,
}

impl Default for Session {
    fn default() -> Self {
        Self::demo()
    }
}

impl Session {
    pub fn demo() -> Self {
        Self {
            transactions: demo_transactions(),
            goals: demo_goals(),
            alerts: demo_alerts(),
        }
    }

    pub fn empty() -> Self {
        Self {
            transactions: Vec::new(),
            goals: Vec::new(),
            alerts: Vec::new(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn add_transaction(&mut self, fields: NewTransaction) -> Result<Transaction> {
        fields.validate()?;
        let tx = fields.with_id(next_id(&self.transactions));
        self.transactions.push(tx.clone());
        Ok(tx)
    }

    /// Validates the whole plan before recording any of its items.
    pub fn add_installments(
        &mut self,
        fields: NewTransaction,
        count: u32,
    ) -> Result<(InstallmentPlan, Vec<Transaction>)> {
        fields.validate()?;
        let plan = stats::installment_split(&fields, count)?;
        let mut created = Vec::with_capacity(plan.items.len());
        for item in &plan.items {
            created.push(self.add_transaction(item.clone())?);
        }
        if !plan.drift.is_zero() {
            tracing::debug!(drift = %plan.drift, count, "installments do not sum to total");
        }
        Ok((plan, created))
    }

    pub fn add_goal(&mut self, fields: NewGoal) -> Result<Goal> {
        fields.validate()?;
        let goal = fields.with_id(next_id(&self.goals));
        self.goals.push(goal.clone());
        Ok(goal)
    }

    pub fn add_alert(&mut self, kind: &str, condition: &str) -> Result<Alert> {
        if kind.trim().is_empty() || condition.trim().is_empty() {
            return Err(MonetaError::validation("Alert type and condition are required"));
        }
        let alert = Alert {
            id: next_id(&self.alerts),
            kind: kind.to_string(),
            condition: condition.to_string(),
            status: AlertStatus::Active,
        };
        self.alerts.push(alert.clone());
        Ok(alert)
    }

    /// Flips the alert's status and returns the new one; `None` if no such id.
    pub fn toggle_alert(&mut self, id: &str) -> Option<AlertStatus> {
        let alert = self.alerts.iter_mut().find(|a| a.id == id)?;
        alert.toggle();
        Some(alert.status)
    }

    pub fn active_alert_count(&self) -> usize {
        stats::active_alert_count(&self.alerts)
    }
}
