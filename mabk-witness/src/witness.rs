//! Witness strategies
//!
//! A [`WitnessStrategy`] knows which circuits to submit and how to fold the
//! returned counts into one number. Two strategies exist:
//!
//! - [`FourSettingWitness`]: the textbook MABK combination of the parity
//!   expectations for `XXX`, `XYY`, `YXY`, `YYX`.
//! - [`SingleCircuitWitness`]: a signed sum of computational-basis
//!   probabilities from one RZ-parametrised GHZ circuit.
//!
//! The two are different estimators and are not expected to agree.

use crate::circuits::{self, GhzTopology};
use crate::config::WitnessConfig;
use crate::expectation::{expectation, probability, witness};
use crate::{Result, WitnessError};
use mabk_backend::sampler::check_batch;
use mabk_backend::{BackendError, OutcomeCounts, Sampler};
use mabk_core::{Basis, BasisSetting, Circuit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, debug_span};

/// The four canonical MABK measurement settings
pub const MABK_SETTINGS: [&str; 4] = ["XXX", "XYY", "YXY", "YYX"];

/// Canonical MABK signs; an ideal GHZ state gives exactly 4
pub const MABK_COEFFICIENTS: [f64; 4] = [1.0, -1.0, -1.0, -1.0];

/// Outcome signs of the single-circuit estimator
pub const SINGLE_CIRCUIT_SIGNS: [(&str, f64); 8] = [
    ("000", 1.0),
    ("001", -1.0),
    ("010", -1.0),
    ("011", 1.0),
    ("100", 1.0),
    ("101", 1.0),
    ("110", -1.0),
    ("111", -1.0),
];

/// One weighted contribution to a witness value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessTerm {
    /// Basis setting or outcome string
    pub label: String,
    pub coefficient: f64,
    /// Expectation value or probability
    pub value: f64,
}

/// Result of evaluating a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessEvaluation {
    pub value: f64,
    pub terms: Vec<WitnessTerm>,
    pub shots: usize,
}

/// Circuits plus a rule to combine their counts
pub trait WitnessStrategy {
    /// Strategy identifier used in reports
    fn strategy(&self) -> Strategy;

    /// Circuits to submit, in the order [`combine`](Self::combine) expects
    fn circuits(&self, config: &WitnessConfig) -> Result<Vec<Circuit>>;

    /// Fold per-circuit counts into a witness value
    fn combine(&self, results: &[OutcomeCounts], shots: usize) -> Result<WitnessEvaluation>;

    /// Build, submit as one batch and combine
    ///
    /// Configuration and circuits are checked before the sampler is called.
    fn evaluate(&self, sampler: &dyn Sampler, config: &WitnessConfig) -> Result<WitnessEvaluation> {
        let _span = debug_span!("evaluate", strategy = %self.strategy(), sampler = sampler.name())
            .entered();

        config.validate()?;
        let circuits = self.circuits(config)?;
        debug!(circuits = circuits.len(), shots = config.shots, "submitting batch");

        let results = sampler.run(&circuits, config.shots)?;
        check_batch(&results, circuits.len(), config.shots)?;

        let evaluation = self.combine(&results, config.shots)?;
        debug!(value = evaluation.value, "witness evaluated");
        Ok(evaluation)
    }
}

/// Parity expectations over several settings, combined with coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct FourSettingWitness {
    settings: Vec<BasisSetting>,
    coefficients: Vec<f64>,
}

impl FourSettingWitness {
    /// Canonical settings with the MABK signs `[+1, -1, -1, -1]`
    pub fn mabk() -> Self {
        Self {
            settings: canonical_settings(),
            coefficients: MABK_COEFFICIENTS.to_vec(),
        }
    }

    /// Canonical settings summed with all coefficients `+1`
    pub fn unsigned() -> Self {
        Self {
            settings: canonical_settings(),
            coefficients: vec![1.0; MABK_SETTINGS.len()],
        }
    }

    /// Arbitrary settings and coefficients of equal length
    pub fn new(settings: Vec<BasisSetting>, coefficients: Vec<f64>) -> Result<Self> {
        if settings.len() != coefficients.len() {
            return Err(WitnessError::CoefficientMismatch {
                expectations: settings.len(),
                coefficients: coefficients.len(),
            });
        }
        Ok(Self {
            settings,
            coefficients,
        })
    }

    /// Parse setting strings; an unknown symbol fails here
    ///
    /// # Example
    /// ```
    /// use mabk_witness::{FourSettingWitness, WitnessError};
    ///
    /// let err = FourSettingWitness::from_strs(&["XXX", "Z'"], vec![1.0, 1.0]).unwrap_err();
    /// assert!(matches!(err, WitnessError::InvalidBasis { .. }));
    /// ```
    pub fn from_strs<S: AsRef<str>>(settings: &[S], coefficients: Vec<f64>) -> Result<Self> {
        Self::new(circuits::parse_settings(settings)?, coefficients)
    }

    pub fn settings(&self) -> &[BasisSetting] {
        &self.settings
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Default for FourSettingWitness {
    fn default() -> Self {
        Self::mabk()
    }
}

fn canonical_settings() -> Vec<BasisSetting> {
    use Basis::{X, Y};
    vec![
        BasisSetting::from([X, X, X]),
        BasisSetting::from([X, Y, Y]),
        BasisSetting::from([Y, X, Y]),
        BasisSetting::from([Y, Y, X]),
    ]
}

impl WitnessStrategy for FourSettingWitness {
    fn strategy(&self) -> Strategy {
        Strategy::FourSetting
    }

    fn circuits(&self, config: &WitnessConfig) -> Result<Vec<Circuit>> {
        let base = circuits::build_ghz_circuit_with(config.topology)?;
        circuits::rotated_circuits(&base, &self.settings)
    }

    fn combine(&self, results: &[OutcomeCounts], shots: usize) -> Result<WitnessEvaluation> {
        if results.len() != self.settings.len() {
            return Err(BackendError::BatchSizeMismatch {
                expected: self.settings.len(),
                actual: results.len(),
            }
            .into());
        }

        let expectations = results
            .iter()
            .map(|counts| expectation(counts, shots))
            .collect::<Result<Vec<_>>>()?;
        let value = witness(&expectations, &self.coefficients)?;

        let terms = self
            .settings
            .iter()
            .zip(&self.coefficients)
            .zip(&expectations)
            .map(|((setting, &coefficient), &value)| {
                debug!(setting = %setting, expectation = value, "setting expectation");
                WitnessTerm {
                    label: setting.to_string(),
                    coefficient,
                    value,
                }
            })
            .collect();

        Ok(WitnessEvaluation { value, terms, shots })
    }
}

/// Signed probability sum over one RZ-parametrised GHZ circuit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleCircuitWitness {
    /// RZ angles on qubits 0, 1, 2
    pub angles: [f64; 3],
    /// GHZ layout of the circuit; chain by default
    pub topology: GhzTopology,
}

impl SingleCircuitWitness {
    pub fn new(angles: [f64; 3]) -> Self {
        Self {
            angles,
            topology: GhzTopology::Chain,
        }
    }

    /// Same angle on all three qubits
    pub fn uniform(theta: f64) -> Self {
        Self::new([theta; 3])
    }

    pub fn with_topology(mut self, topology: GhzTopology) -> Self {
        self.topology = topology;
        self
    }

    /// The witness value of one outcome-count map
    pub fn value_of(counts: &OutcomeCounts, shots: usize) -> Result<(f64, Vec<WitnessTerm>)> {
        let mut value = 0.0;
        let mut terms = Vec::with_capacity(SINGLE_CIRCUIT_SIGNS.len());
        for (outcome, sign) in SINGLE_CIRCUIT_SIGNS {
            let p = probability(counts, outcome, shots)?;
            value += sign * p;
            terms.push(WitnessTerm {
                label: outcome.to_string(),
                coefficient: sign,
                value: p,
            });
        }
        Ok((value, terms))
    }
}

impl Default for SingleCircuitWitness {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

impl WitnessStrategy for SingleCircuitWitness {
    fn strategy(&self) -> Strategy {
        Strategy::SingleCircuit
    }

    fn circuits(&self, _config: &WitnessConfig) -> Result<Vec<Circuit>> {
        Ok(vec![circuits::mabk_operator_circuit(
            self.angles,
            self.topology,
        )?])
    }

    fn combine(&self, results: &[OutcomeCounts], shots: usize) -> Result<WitnessEvaluation> {
        let [counts] = results else {
            return Err(BackendError::BatchSizeMismatch {
                expected: 1,
                actual: results.len(),
            }
            .into());
        };
        let (value, terms) = Self::value_of(counts, shots)?;
        Ok(WitnessEvaluation { value, terms, shots })
    }
}

/// Runtime strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    SingleCircuit,
    FourSetting,
}

impl Strategy {
    /// Strategy with default parameters
    pub fn build(self) -> Box<dyn WitnessStrategy> {
        match self {
            Strategy::SingleCircuit => Box::new(SingleCircuitWitness::default()),
            Strategy::FourSetting => Box::new(FourSettingWitness::mabk()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::SingleCircuit => "single-circuit",
            Strategy::FourSetting => "four-setting",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = WitnessError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single-circuit" => Ok(Strategy::SingleCircuit),
            "four-setting" => Ok(Strategy::FourSetting),
            other => Err(WitnessError::config(format!(
                "unknown strategy '{other}', expected 'single-circuit' or 'four-setting'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn counts(pairs: &[(&str, usize)]) -> OutcomeCounts {
        let shots = pairs.iter().map(|(_, c)| c).sum();
        OutcomeCounts::from_counts(pairs.iter().copied(), shots).unwrap()
    }

    #[test]
    fn test_canonical_settings_match_strings() {
        let parsed = circuits::parse_settings(&MABK_SETTINGS).unwrap();
        assert_eq!(FourSettingWitness::mabk().settings(), parsed.as_slice());
    }

    #[test]
    fn test_four_setting_combine_ideal() {
        let results = vec![
            counts(&[("000", 50), ("011", 50)]),
            counts(&[("001", 100)]),
            counts(&[("010", 60), ("111", 40)]),
            counts(&[("100", 100)]),
        ];

        let signed = FourSettingWitness::mabk().combine(&results, 100).unwrap();
        assert_relative_eq!(signed.value, 4.0);
        assert_eq!(signed.terms.len(), 4);
        assert_eq!(signed.terms[1].label, "XYY");
        assert_relative_eq!(signed.terms[1].value, -1.0);

        let plain = FourSettingWitness::unsigned().combine(&results, 100).unwrap();
        assert_relative_eq!(plain.value, -2.0);
    }

    #[test]
    fn test_four_setting_wrong_result_count() {
        let results = vec![counts(&[("000", 10)])];
        let err = FourSettingWitness::mabk().combine(&results, 10).unwrap_err();
        assert!(matches!(
            err,
            WitnessError::Simulation(BackendError::BatchSizeMismatch {
                expected: 4,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_mismatch() {
        let err = FourSettingWitness::from_strs(&["XXX", "XYY"], vec![1.0]).unwrap_err();
        assert!(matches!(err, WitnessError::CoefficientMismatch { .. }));
    }

    #[test]
    fn test_single_circuit_signs() {
        let witness = SingleCircuitWitness::default();

        let eval = witness.combine(&[counts(&[("000", 10)])], 10).unwrap();
        assert_relative_eq!(eval.value, 1.0);

        let eval = witness
            .combine(&[counts(&[("000", 5), ("111", 5)])], 10)
            .unwrap();
        assert_relative_eq!(eval.value, 0.0);

        let eval = witness
            .combine(&[counts(&[("101", 3), ("110", 1)])], 4)
            .unwrap();
        assert_relative_eq!(eval.value, 0.5);
        assert_eq!(eval.terms.len(), 8);
    }

    #[test]
    fn test_single_circuit_requires_one_result() {
        let err = SingleCircuitWitness::default().combine(&[], 10).unwrap_err();
        assert!(matches!(err, WitnessError::Simulation(_)));
    }

    #[test]
    fn test_single_circuit_uses_chain() {
        let circuits = SingleCircuitWitness::uniform(1.0)
            .circuits(&WitnessConfig::default())
            .unwrap();
        assert_eq!(circuits.len(), 1);
        let second_cnot = circuits[0].get_operation(2).unwrap();
        assert_eq!(second_cnot.qubits()[0].index(), 1);
    }

    #[test]
    fn test_strategy_round_trip_names() {
        for strategy in [Strategy::SingleCircuit, Strategy::FourSetting] {
            assert_eq!(strategy.as_str().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.build().strategy(), strategy);
        }
        assert!("three-setting".parse::<Strategy>().is_err());
        assert_eq!(
            serde_json::to_string(&Strategy::FourSetting).unwrap(),
            "\"four-setting\""
        );
    }
}
