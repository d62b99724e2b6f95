//! Compound-interest projections: forward (compound) and inverse (goal amount) modes

mod state;
mod engine;
mod snapshots;
mod metrics;

pub use state::ProjectionState;
pub use engine::{
    monthly_rate, required_contribution, GoalInput, ProjectionConfig, ProjectionEngine,
    ProjectionInput, DEFAULT_SNAPSHOT_WINDOW,
};
pub use snapshots::{GoalResult, ProjectionResult, ProjectionSnapshot};
pub use metrics::{doubling_time, effective_annual_rate, total_return_pct, PerformanceMetrics};
