//! Per-period output structures for projections

use serde::{Deserialize, Serialize};

use super::state::ProjectionState;

/// One period of a compounding projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSnapshot {
    pub period: u32,
    pub invested: f64,
    pub interest: f64,
    pub total: f64,
}

impl ProjectionSnapshot {
    pub fn from_state(state: &ProjectionState) -> Self {
        Self {
            period: state.period,
            invested: state.invested,
            interest: state.interest(),
            total: state.total,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Balance after the last period
    pub final_amount: f64,

    /// Starting capital plus all contributions
    pub total_invested: f64,

    /// `final_amount - total_invested`
    pub total_interest: f64,

    /// Number of periods projected
    pub periods: u32,

    /// Trailing snapshots kept for display (all of them when no window is configured)
    pub snapshots: Vec<ProjectionSnapshot>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            final_amount: 0.0,
            total_invested: 0.0,
            total_interest: 0.0,
            periods: 0,
            snapshots: Vec::new(),
        }
    }

    /// Record a period; when `window` is set only the last `window` snapshots are kept
    pub fn add_snapshot(&mut self, snapshot: ProjectionSnapshot, window: Option<usize>) {
        self.final_amount = snapshot.total;
        self.total_invested = snapshot.invested;
        self.total_interest = snapshot.interest;
        self.periods = snapshot.period;

        self.snapshots.push(snapshot);
        if let Some(limit) = window {
            if self.snapshots.len() > limit {
                let excess = self.snapshots.len() - limit;
                self.snapshots.drain(..excess);
            }
        }
    }

    /// Last recorded snapshot, if any period ran
    pub fn last(&self) -> Option<&ProjectionSnapshot> {
        self.snapshots.last()
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a goal-amount calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResult {
    /// Target the contribution was solved for
    pub goal: f64,

    /// Constant monthly contribution that reaches the goal
    pub required_contribution: f64,

    /// Forward projection run with `required_contribution` from zero capital
    pub projection: ProjectionResult,
}
