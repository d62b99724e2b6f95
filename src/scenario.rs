//! Scenario runner for batch projections
//!
//! Holds a base input and engine once, then runs many variants of it: different
//! rates, horizons or contributions, one result per variant in input order.

use rayon::prelude::*;

use crate::error::Result;
use crate::projection::{monthly_rate, ProjectionEngine, ProjectionInput, ProjectionResult};

/// Pre-configured runner for batch projections
///
/// # Example
/// ```
/// use kaizen::ScenarioRunner;
/// use kaizen::projection::ProjectionInput;
///
/// let runner = ScenarioRunner::new(ProjectionInput::with_annual_percent(1000.0, 500.0, 12.0, 24));
/// let results = runner.sweep_annual_rates(&[6.0, 9.0, 12.0]).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ProjectionInput,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Runner with the default display-window engine
    pub fn new(base: ProjectionInput) -> Self {
        Self::with_engine(base, ProjectionEngine::default())
    }

    pub fn with_engine(base: ProjectionInput, engine: ProjectionEngine) -> Self {
        Self { base, engine }
    }

    /// Run the base input alone
    pub fn run(&self) -> Result<ProjectionResult> {
        self.engine.project(&self.base)
    }

    /// Run a batch of inputs in parallel; fails on the first invalid input
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Result<Vec<ProjectionResult>> {
        inputs
            .par_iter()
            .map(|input| self.engine.project(input))
            .collect()
    }

    /// Base input re-run at each annual percentage rate
    pub fn sweep_annual_rates(&self, annual_percents: &[f64]) -> Result<Vec<ProjectionResult>> {
        let inputs: Vec<ProjectionInput> = annual_percents
            .iter()
            .map(|&pct| ProjectionInput {
                monthly_rate: monthly_rate(pct),
                ..self.base
            })
            .collect();
        self.run_batch(&inputs)
    }

    /// Base input re-run at each horizon
    pub fn sweep_horizons(&self, months: &[u32]) -> Result<Vec<ProjectionResult>> {
        let inputs: Vec<ProjectionInput> = months
            .iter()
            .map(|&m| ProjectionInput { months: m, ..self.base })
            .collect();
        self.run_batch(&inputs)
    }

    pub fn base(&self) -> &ProjectionInput {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ProjectionInput {
        &mut self.base
    }
}
