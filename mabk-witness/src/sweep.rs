//! Angle sweep of the single-circuit witness

use crate::circuits::{self, GhzTopology};
use crate::config::SweepConfig;
use crate::plot;
use crate::witness::SingleCircuitWitness;
use crate::Result;
use mabk_backend::sampler::check_batch;
use mabk_backend::Sampler;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info, info_span};

/// Witness value at one angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub theta: f64,
    pub witness: f64,
}

/// Witness values over a range of angles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
    pub bound: f64,
    pub shots: usize,
}

/// Evaluate the single-circuit witness with θ_a = θ_b = θ_c = θ at every
/// configured angle
///
/// All circuits go to `sampler` in a single batch.
pub fn sweep(sampler: &dyn Sampler, config: &SweepConfig) -> Result<SweepResult> {
    let _span = info_span!("sweep", points = config.points, shots = config.shots).entered();

    config.validate()?;
    let angles = config.angles();
    let batch = angles
        .iter()
        .map(|&theta| circuits::mabk_operator_circuit([theta; 3], GhzTopology::Chain))
        .collect::<Result<Vec<_>>>()?;

    debug!(circuits = batch.len(), sampler = sampler.name(), "submitting sweep batch");
    let results = sampler.run(&batch, config.shots)?;
    check_batch(&results, batch.len(), config.shots)?;

    let points = angles
        .into_iter()
        .zip(&results)
        .map(|(theta, counts)| -> Result<SweepPoint> {
            let (witness, _) = SingleCircuitWitness::value_of(counts, config.shots)?;
            Ok(SweepPoint { theta, witness })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = SweepResult {
        points,
        bound: config.bound,
        shots: config.shots,
    };
    info!(
        max_abs = result.max_abs(),
        violations = result.violations(),
        "sweep complete"
    );
    Ok(result)
}

impl SweepResult {
    /// Largest `|witness|` seen, zero for an empty sweep
    pub fn max_abs(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.witness.abs())
            .fold(0.0, f64::max)
    }

    /// Number of angles where `|witness|` exceeds the bound
    pub fn violations(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.witness.abs() > self.bound)
            .count()
    }

    /// `theta,witness` table with a header row
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("theta,witness\n");
        for p in &self.points {
            let _ = writeln!(csv, "{:.6},{:.6}", p.theta, p.witness);
        }
        csv
    }

    /// SVG line plot with a dashed reference line at the bound
    pub fn to_svg(&self) -> String {
        plot::render_svg(self)
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_csv())?;
        debug!(path = %path.as_ref().display(), "wrote CSV");
        Ok(())
    }

    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_svg())?;
        debug!(path = %path.as_ref().display(), "wrote SVG");
        Ok(())
    }
}
