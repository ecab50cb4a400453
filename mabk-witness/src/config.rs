//! Run configuration

use crate::circuits::GhzTopology;
use crate::{Result, WitnessError};
use mabk_backend::LocalSimulatorConfig;
use std::f64::consts::TAU;
use std::path::PathBuf;

/// Classical bound of the 3-qubit MABK witness
pub const CLASSICAL_BOUND: f64 = 4.0;

/// Configuration for a single witness evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct WitnessConfig {
    /// Shots per circuit
    ///
    /// Default: 8192
    pub shots: usize,

    /// Sampler seed; `None` draws from OS entropy
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// CNOT layout of the GHZ preparation
    ///
    /// Default: [`GhzTopology::Star`]
    pub topology: GhzTopology,

    /// Violation threshold on `|value|`
    ///
    /// Default: 4.0
    pub bound: f64,
}

impl Default for WitnessConfig {
    fn default() -> Self {
        Self {
            shots: 8192,
            seed: None,
            topology: GhzTopology::Star,
            bound: CLASSICAL_BOUND,
        }
    }
}

impl WitnessConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the sampler seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the GHZ topology
    pub fn with_topology(mut self, topology: GhzTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the violation bound
    pub fn with_bound(mut self, bound: f64) -> Self {
        self.bound = bound;
        self
    }

    /// Local sampler configuration matching this run
    pub fn backend_config(&self) -> LocalSimulatorConfig {
        backend_config(self.seed)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(WitnessError::DegenerateShots);
        }
        validate_bound(self.bound)
    }
}

/// Configuration for the angle sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Number of evenly spaced angles, endpoints included
    ///
    /// Default: 101
    pub points: usize,

    /// Shots per angle
    ///
    /// Default: 1000
    pub shots: usize,

    /// Sampler seed
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// First angle in radians
    ///
    /// Default: 0
    pub start: f64,

    /// Last angle in radians
    ///
    /// Default: 2π
    pub end: f64,

    /// Violation bound drawn as the reference line
    ///
    /// Default: 4.0
    pub bound: f64,

    /// Where the SVG plot is written
    ///
    /// Default: `mabk_violation.svg`
    pub output: PathBuf,

    /// Optional CSV table of `(theta, witness)` rows
    ///
    /// Default: None
    pub csv: Option<PathBuf>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            points: 101,
            shots: 1000,
            seed: None,
            start: 0.0,
            end: TAU,
            bound: CLASSICAL_BOUND,
            output: PathBuf::from("mabk_violation.svg"),
            csv: None,
        }
    }
}

impl SweepConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of angles
    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    /// Set the shots per angle
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the sampler seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the angle range
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the SVG output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Also write a CSV table
    pub fn with_csv(mut self, csv: impl Into<PathBuf>) -> Self {
        self.csv = Some(csv.into());
        self
    }

    /// The swept angles, endpoints included
    ///
    /// # Example
    /// ```
    /// use mabk_witness::SweepConfig;
    ///
    /// let angles = SweepConfig::new().with_points(3).with_range(0.0, 2.0).angles();
    /// assert_eq!(angles, vec![0.0, 1.0, 2.0]);
    /// ```
    pub fn angles(&self) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + step * i as f64).collect()
            }
        }
    }

    /// Local sampler configuration matching this run
    pub fn backend_config(&self) -> LocalSimulatorConfig {
        backend_config(self.seed)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(WitnessError::DegenerateShots);
        }
        if self.points < 2 {
            return Err(WitnessError::config(format!(
                "sweep needs at least 2 points, got {}",
                self.points
            )));
        }
        if !self.start.is_finite() || !self.end.is_finite() || self.start >= self.end {
            return Err(WitnessError::config(format!(
                "invalid angle range [{}, {}]",
                self.start, self.end
            )));
        }
        validate_bound(self.bound)
    }
}

fn backend_config(seed: Option<u64>) -> LocalSimulatorConfig {
    let config = LocalSimulatorConfig::default();
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn validate_bound(bound: f64) -> Result<()> {
    if !bound.is_finite() || bound <= 0.0 {
        return Err(WitnessError::config(format!(
            "bound must be positive and finite, got {bound}"
        )));
    }
    Ok(())
}
