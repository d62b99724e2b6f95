//! Cash-flow transactions, filtering and totals

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::charts::Category;
use crate::error::{Error, Result};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Apply the sign convention: income positive, expense negative
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionKind::Income => amount.abs(),
            TransactionKind::Expense => -amount.abs(),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,

    /// Signed amount (expenses are negative)
    pub amount: f64,

    pub description: String,
    pub date: NaiveDate,
    pub category: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Build a transaction, normalising the amount's sign to its kind
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: id.into(),
            amount: kind.signed(amount),
            description: description.into(),
            date,
            category: category.into(),
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Cash-flow view filter; `None` fields match everything
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description
    pub search: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let matches_search = match &self.search {
            Some(term) => transaction
                .description
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };
        let matches_category = self
            .category
            .as_ref()
            .map_or(true, |c| &transaction.category == c);
        let matches_kind = self.kind.map_or(true, |k| transaction.kind == k);

        matches_search && matches_category && matches_kind
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Income, expense and balance over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowTotals {
    pub income: f64,

    /// Sum of absolute expense amounts
    pub expense: f64,

    /// `income - expense`
    pub balance: f64,

    pub count: usize,
}

impl CashFlowTotals {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Self::default();
        for t in transactions {
            match t.kind {
                TransactionKind::Income => totals.income += t.amount,
                TransactionKind::Expense => totals.expense += t.amount.abs(),
            }
            totals.count += 1;
        }
        totals.balance = totals.income - totals.expense;
        totals
    }
}

/// Spend for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpense {
    pub name: String,
    pub color: String,
    pub total: f64,
}

/// Expense total per category, in category order, dropping categories with no spend
pub fn category_expenses(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategoryExpense> {
    categories
        .iter()
        .map(|category| CategoryExpense {
            name: category.name.clone(),
            color: category.color.clone(),
            total: transactions
                .iter()
                .filter(|t| t.is_expense() && t.category == category.name)
                .map(|t| t.amount.abs())
                .sum(),
        })
        .filter(|c| c.total > 0.0)
        .collect()
}

/// Settlement status of a new transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Settled now; needs a payment method
    #[default]
    Paid,
    /// On credit, settled later
    Credit,
}

/// Unvalidated input from the new-transaction form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub kind: TransactionKind,

    /// Client for income, provider for expenses
    pub counterparty: String,

    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Category used when a draft names none
pub const DEFAULT_CATEGORY: &str = "Outros";

impl TransactionDraft {
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount == 0.0 {
            return Err(Error::invalid("amount", "must be a non-zero number"));
        }
        if self.date.is_none() {
            return Err(Error::invalid("date", "is required"));
        }
        let has_method = self.method.as_deref().is_some_and(|m| !m.trim().is_empty());
        if self.status == PaymentStatus::Paid && !has_method {
            return Err(Error::invalid("method", "is required for paid transactions"));
        }
        Ok(())
    }

    /// Validate and turn into a transaction with the given id
    pub fn into_transaction(self, id: impl Into<String>) -> Result<Transaction> {
        self.validate()?;

        let date = self
            .date
            .ok_or_else(|| Error::invalid("date", "is required"))?;
        let description = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.counterparty,
        };
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Transaction::new(id, self.amount, description, date, category, self.kind))
    }
}
