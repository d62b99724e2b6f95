//! Running state of a compounding projection

use super::engine::ProjectionInput;

/// Accumulated position at the end of a period
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current period (0 before the first contribution, then 1-indexed)
    pub period: u32,

    /// Running balance including interest
    pub total: f64,

    /// Starting capital plus every contribution so far
    pub invested: f64,

    /// Starting capital, kept so `invested` can be rebuilt exactly each period
    initial: f64,
}

impl ProjectionState {
    /// State at period 0: nothing but the starting capital
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            period: 0,
            total: input.initial,
            invested: input.initial,
            initial: input.initial,
        }
    }

    /// Compound one period, then add the contribution at period end
    pub fn advance(&mut self, monthly_rate: f64, contribution: f64) {
        self.period += 1;
        self.total = self.total * (1.0 + monthly_rate) + contribution;
        // initial + c * n rather than repeated addition: no drift over long horizons
        self.invested = self.initial + contribution * self.period as f64;
    }

    /// Interest earned so far
    pub fn interest(&self) -> f64 {
        self.total - self.invested
    }
}
