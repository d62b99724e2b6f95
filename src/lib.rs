//! Kaizen - logic core of a small-business finance dashboard
//!
//! This library provides:
//! - Compound-interest projections and the inverse goal-amount calculation
//! - Rate and horizon sweeps over the calculator
//! - Transactions, investment catalog and monthly chart aggregates
//! - A mock session store: login, registration, logout, password reset and restore

pub mod error;
pub mod config;
pub mod projection;
pub mod scenario;
pub mod ledger;
pub mod auth;

// Re-export commonly used types
pub use error::{Error, Result};
pub use config::KaizenConfig;
pub use projection::{GoalInput, ProjectionEngine, ProjectionInput, ProjectionResult};
pub use scenario::ScenarioRunner;
pub use ledger::{Investment, Transaction};
pub use auth::{AuthOutcome, SessionState, SessionStore};
