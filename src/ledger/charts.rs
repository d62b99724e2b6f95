//! Monthly series and categories behind the charts view

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::transactions::{Transaction, TransactionKind};

/// Spending category with its display colour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// One month of income, expense and running balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub income: f64,
    pub expense: f64,
    /// Cumulative net cash up to and including this month
    pub balance: f64,
}

impl MonthlyPoint {
    /// Group transactions by calendar month (`YYYY-MM`) in date order with a running balance
    pub fn series_from_transactions(transactions: &[Transaction]) -> Vec<MonthlyPoint> {
        let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
        for t in transactions {
            let entry = months.entry((t.date.year(), t.date.month())).or_default();
            match t.kind {
                TransactionKind::Income => entry.0 += t.amount,
                TransactionKind::Expense => entry.1 += t.amount.abs(),
            }
        }

        let mut balance = 0.0;
        months
            .into_iter()
            .map(|((year, month), (income, expense))| {
                balance += income - expense;
                MonthlyPoint {
                    month: format!("{:04}-{:02}", year, month),
                    income,
                    expense,
                    balance,
                }
            })
            .collect()
    }
}

/// Headline figures over a monthly series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub total_income: f64,
    pub total_expense: f64,
    /// `None` for an empty series
    pub average_balance: Option<f64>,
    /// `(income - expense) / income * 100`; `None` when there is no income
    pub savings_rate_pct: Option<f64>,
}

impl SeriesSummary {
    pub fn from_points(points: &[MonthlyPoint]) -> Self {
        let total_income: f64 = points.iter().map(|p| p.income).sum();
        let total_expense: f64 = points.iter().map(|p| p.expense).sum();

        let average_balance = if points.is_empty() {
            None
        } else {
            Some(points.iter().map(|p| p.balance).sum::<f64>() / points.len() as f64)
        };

        let savings_rate_pct = if total_income > 0.0 {
            Some((total_income - total_expense) / total_income * 100.0)
        } else {
            None
        };

        Self {
            total_income,
            total_expense,
            average_balance,
            savings_rate_pct,
        }
    }
}
