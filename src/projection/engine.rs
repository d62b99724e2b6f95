//! Core projection engine for monthly compounding projections

use log::debug;
use serde::{Deserialize, Serialize};

use super::snapshots::{GoalResult, ProjectionResult, ProjectionSnapshot};
use super::state::ProjectionState;
use crate::error::{Error, Result};

/// Number of trailing periods the dashboard displays
pub const DEFAULT_SNAPSHOT_WINDOW: usize = 12;

/// Convert an annual percentage (e.g. 12.0 for 12% a year) to a monthly rate (0.01)
pub fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / 12.0
}

/// Inputs for a forward (compound) projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting capital
    pub initial: f64,

    /// Contribution added at the end of every period
    pub monthly_contribution: f64,

    /// Periodic rate as a decimal (0.01 = 1% a month)
    pub monthly_rate: f64,

    /// Horizon in periods
    pub months: u32,
}

impl ProjectionInput {
    pub fn new(initial: f64, monthly_contribution: f64, monthly_rate: f64, months: u32) -> Self {
        Self {
            initial,
            monthly_contribution,
            monthly_rate,
            months,
        }
    }

    /// Same input with an annual percentage instead of a monthly decimal rate
    pub fn with_annual_percent(
        initial: f64,
        monthly_contribution: f64,
        annual_percent: f64,
        months: u32,
    ) -> Self {
        Self::new(initial, monthly_contribution, monthly_rate(annual_percent), months)
    }

    pub fn validate(&self) -> Result<()> {
        check_amount("initial", self.initial)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;
        check_amount("monthly_rate", self.monthly_rate)?;
        check_months(self.months)
    }
}

/// Inputs for the inverse (goal amount) calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalInput {
    /// Amount to reach at the end of the horizon
    pub goal: f64,

    /// Periodic rate as a decimal
    pub monthly_rate: f64,

    /// Horizon in periods
    pub months: u32,
}

impl GoalInput {
    pub fn new(goal: f64, monthly_rate: f64, months: u32) -> Self {
        Self {
            goal,
            monthly_rate,
            months,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_amount("goal", self.goal)?;
        check_amount("monthly_rate", self.monthly_rate)?;
        check_months(self.months)
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(Error::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

fn check_months(months: u32) -> Result<()> {
    if months == 0 {
        return Err(Error::invalid("months", "horizon must be at least one period"));
    }
    Ok(())
}

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Keep only this many trailing snapshots; `None` keeps every period
    pub snapshot_window: Option<usize>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            snapshot_window: Some(DEFAULT_SNAPSHOT_WINDOW),
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Engine that keeps every snapshot instead of the display window
    pub fn detailed() -> Self {
        Self::new(ProjectionConfig {
            snapshot_window: None,
        })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Forward projection: compound monthly, contributing at the end of each period
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        input.validate()?;

        let mut result = ProjectionResult::new();
        let mut state = ProjectionState::from_input(input);

        for _month in 1..=input.months {
            state.advance(input.monthly_rate, input.monthly_contribution);
            result.add_snapshot(
                ProjectionSnapshot::from_state(&state),
                self.config.snapshot_window,
            );
        }

        debug!(
            "Projected {} months: final {:.2}, invested {:.2}, interest {:.2}",
            result.periods, result.final_amount, result.total_invested, result.total_interest
        );

        Ok(result)
    }

    /// Goal mode: solve for the contribution, then project it forward from zero capital
    pub fn project_goal(&self, input: &GoalInput) -> Result<GoalResult> {
        let required_contribution = required_contribution(input)?;

        let forward =
            ProjectionInput::new(0.0, required_contribution, input.monthly_rate, input.months);
        let projection = self.project(&forward)?;

        Ok(GoalResult {
            goal: input.goal,
            required_contribution,
            projection,
        })
    }
}

/// Constant monthly contribution that grows to `goal` after `months` periods
///
/// Annuity formula `goal * r / ((1 + r)^n - 1)`, or exactly `goal / n` when `r == 0`.
pub fn required_contribution(input: &GoalInput) -> Result<f64> {
    input.validate()?;

    let months = input.months as f64;
    let rate = input.monthly_rate;

    if rate == 0.0 {
        return Ok(input.goal / months);
    }

    // (1 + r)^n - 1 without losing precision for tiny rates
    let growth = (months * rate.ln_1p()).exp_m1();
    let contribution = input.goal * rate / growth;

    if !contribution.is_finite() {
        return Err(Error::invalid(
            "monthly_rate",
            format!("no finite contribution for rate {} over {} months", rate, input.months),
        ));
    }

    Ok(contribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::default()
    }

    #[test]
    fn test_projection_runs() {
        let input = ProjectionInput::with_annual_percent(1000.0, 500.0, 12.0, 12);
        let result = engine().project(&input).unwrap();

        assert_eq!(result.periods, 12);
        assert_eq!(result.snapshots.len(), 12);
        assert_eq!(result.snapshots[0].period, 1);
        assert_eq!(result.total_invested, 7000.0);
        assert!(result.final_amount > result.total_invested);
    }

    #[test]
    fn test_first_period_matches_recurrence() {
        let input = ProjectionInput::new(1000.0, 500.0, 0.01, 3);
        let result = engine().project(&input).unwrap();

        assert_relative_eq!(result.snapshots[0].total, 1510.0, epsilon = 1e-9);
        assert_relative_eq!(result.snapshots[1].total, 1510.0 * 1.01 + 500.0, epsilon = 1e-9);
        assert_relative_eq!(result.snapshots[0].interest, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_totals_balance_every_period() {
        let inputs = [
            ProjectionInput::new(0.0, 0.0, 0.0, 1),
            ProjectionInput::new(1000.0, 0.0, 0.02, 60),
            ProjectionInput::new(0.0, 250.0, 0.005, 360),
            ProjectionInput::new(12_345.67, 89.1, 0.0125, 240),
        ];

        for input in &inputs {
            let result = ProjectionEngine::detailed().project(input).unwrap();
            for snap in &result.snapshots {
                assert_relative_eq!(
                    snap.total,
                    snap.invested + snap.interest,
                    max_relative = 1e-9
                );
            }
            assert_eq!(
                result.total_invested,
                input.initial + input.monthly_contribution * input.months as f64
            );
            assert_relative_eq!(
                result.final_amount,
                result.total_invested + result.total_interest,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_short_horizon_returns_fewer_snapshots() {
        let input = ProjectionInput::new(100.0, 10.0, 0.01, 5);
        let result = engine().project(&input).unwrap();
        assert_eq!(result.snapshots.len(), 5);

        let input = ProjectionInput::new(100.0, 10.0, 0.01, 40);
        let result = engine().project(&input).unwrap();
        assert_eq!(result.snapshots.len(), 12);
        assert_eq!(result.snapshots[0].period, 29);
        assert_eq!(result.snapshots[11].period, 40);
    }

    #[test]
    fn test_zero_rate_is_plain_savings() {
        let input = ProjectionInput::new(500.0, 100.0, 0.0, 24);
        let result = engine().project(&input).unwrap();
        assert_eq!(result.final_amount, 2900.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let bad = [
            ProjectionInput::new(-1.0, 0.0, 0.01, 12),
            ProjectionInput::new(0.0, f64::NAN, 0.01, 12),
            ProjectionInput::new(0.0, 0.0, f64::INFINITY, 12),
            ProjectionInput::new(0.0, 0.0, -0.01, 12),
            ProjectionInput::new(100.0, 10.0, 0.01, 0),
        ];
        for input in &bad {
            assert!(matches!(
                engine().project(input),
                Err(Error::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_goal_round_trip() {
        let cases = [
            GoalInput::new(100_000.0, monthly_rate(12.0), 12),
            GoalInput::new(1_000_000.0, monthly_rate(8.5), 360),
            GoalInput::new(2_500.0, 1e-9, 6),
        ];

        for input in &cases {
            let result = engine().project_goal(input).unwrap();
            assert_relative_eq!(result.projection.final_amount, input.goal, max_relative = 1e-9);

            // Feeding the contribution back through a fresh projection reaches the goal too
            let forward = ProjectionInput::new(
                0.0,
                result.required_contribution,
                input.monthly_rate,
                input.months,
            );
            let again = engine().project(&forward).unwrap();
            assert_relative_eq!(again.final_amount, input.goal, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_goal_zero_rate_is_exact_division() {
        let input = GoalInput::new(12_000.0, 0.0, 7);
        let contribution = required_contribution(&input).unwrap();
        assert_eq!(contribution, 12_000.0 / 7.0);
    }

    #[test]
    fn test_goal_rejects_empty_horizon() {
        let input = GoalInput::new(10_000.0, 0.01, 0);
        assert!(matches!(
            required_contribution(&input),
            Err(Error::InvalidInput { field: "months", .. })
        ));
        assert!(engine().project_goal(&input).is_err());
    }

    #[test]
    fn test_goal_rejects_negative_goal() {
        let input = GoalInput::new(-5.0, 0.01, 12);
        assert!(matches!(
            required_contribution(&input),
            Err(Error::InvalidInput { field: "goal", .. })
        ));
    }
}
