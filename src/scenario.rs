//! Scenario runner for batch projections
//!
//! Holds a base input and runs variants of it, fanning independent
//! projections out across the rayon thread pool.

use rayon::prelude::*;

use crate::calculator::CalculatorDefaults;
use crate::projection::{project, ProjectionInput, ProjectionResult};

/// Runner for comparing projections against a shared base input
///
/// # Example
/// ```
/// use clinic_analytics::ScenarioRunner;
///
/// let runner = ScenarioRunner::new();
/// let results = runner.sweep_returns(&[4.0, 7.0, 10.0]);
/// assert!(results[2].1.final_value > results[0].1.final_value);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ProjectionInput,
}

impl ScenarioRunner {
    /// Create runner from the calculator defaults
    pub fn new() -> Self {
        Self::with_input(CalculatorDefaults::default().to_input())
    }

    pub fn with_input(base: ProjectionInput) -> Self {
        Self { base }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> ProjectionResult {
        project(input)
    }

    /// Run the base input
    pub fn run_base(&self) -> ProjectionResult {
        project(&self.base)
    }

    /// Run many inputs in parallel; results keep input order
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
        inputs.par_iter().map(project).collect()
    }

    /// Run the base input once per annual return (in percent)
    pub fn sweep_returns(&self, annual_returns: &[f64]) -> Vec<(f64, ProjectionResult)> {
        annual_returns
            .par_iter()
            .map(|&rate| (rate, project(&self.base.with_return(rate))))
            .collect()
    }

    pub fn base(&self) -> &ProjectionInput {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ProjectionInput {
        &mut self.base
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
