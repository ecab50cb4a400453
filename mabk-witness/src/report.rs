//! Violation check and report formatting

use crate::config::WitnessConfig;
use crate::witness::{Strategy, WitnessEvaluation, WitnessStrategy, WitnessTerm};
use crate::Result;
use mabk_backend::Sampler;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Outcome of one witness evaluation against the classical bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MabkReport {
    pub value: f64,
    pub bound: f64,
    /// `|value| > bound`
    pub violation: bool,
    pub terms: Vec<WitnessTerm>,
    pub shots: usize,
    pub strategy: Strategy,
}

impl MabkReport {
    pub fn new(strategy: Strategy, evaluation: WitnessEvaluation, bound: f64) -> Self {
        Self {
            value: evaluation.value,
            bound,
            violation: is_violation(evaluation.value, bound),
            terms: evaluation.terms,
            shots: evaluation.shots,
            strategy,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for MabkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MABK value: {}", self.value)?;
        write!(f, "Violation: {}", self.violation)
    }
}

/// Strictly greater than the bound in absolute value
#[inline]
pub fn is_violation(value: f64, bound: f64) -> bool {
    value.abs() > bound
}

/// Evaluate `strategy` on `sampler` and wrap the result in a report
pub fn evaluate(
    strategy: &dyn WitnessStrategy,
    sampler: &dyn Sampler,
    config: &WitnessConfig,
) -> Result<MabkReport> {
    let evaluation = strategy.evaluate(sampler, config)?;
    let report = MabkReport::new(strategy.strategy(), evaluation, config.bound);
    info!(
        strategy = %report.strategy,
        value = report.value,
        violation = report.violation,
        "witness report"
    );
    Ok(report)
}
