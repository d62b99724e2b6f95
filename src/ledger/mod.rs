//! Dashboard data: transactions, investment catalog and monthly chart series

mod transactions;
mod investments;
mod charts;
pub mod seed;
pub mod loader;

pub use transactions::{
    category_expenses, CashFlowTotals, CategoryExpense, PaymentStatus, Transaction,
    TransactionDraft, TransactionFilter, TransactionKind, DEFAULT_CATEGORY,
};
pub use investments::{investment_types, Investment, InvestmentQuery, InvestmentSort, RiskTier};
pub use charts::{Category, MonthlyPoint, SeriesSummary};
pub use loader::{load_transactions, load_transactions_from_reader};
