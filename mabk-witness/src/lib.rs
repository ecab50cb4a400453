//! MABK Bell-inequality witness for a 3-qubit GHZ state
//!
//! The pipeline builds GHZ circuits, appends measurement-basis rotations,
//! sends them to a [`Sampler`](mabk_backend::Sampler) and folds the counts
//! into a witness value. Values with `|w| > 4` cannot be produced by a local
//! hidden-variable model.
//!
//! # Example
//!
//! ```
//! use mabk_backend::LocalSimulatorBackend;
//! use mabk_witness::{report, FourSettingWitness, WitnessConfig};
//!
//! let config = WitnessConfig::new().with_shots(2048).with_seed(7);
//! let backend = LocalSimulatorBackend::with_config(config.backend_config());
//!
//! let report = report::evaluate(&FourSettingWitness::mabk(), &backend, &config).unwrap();
//! assert!(report.value > 3.9);
//! assert!(report.to_string().starts_with("MABK value: "));
//! ```

pub mod circuits;
pub mod config;
pub mod error;
pub mod expectation;
pub mod logging;
pub mod plot;
pub mod report;
pub mod sweep;
pub mod witness;

pub use circuits::{
    apply_basis_rotation, build_ghz_circuit, build_ghz_circuit_with, mabk_operator_circuit,
    rotated_circuits, GhzTopology,
};
pub use config::{SweepConfig, WitnessConfig, CLASSICAL_BOUND};
pub use error::{Result, WitnessError};
pub use expectation::{expectation, probability, witness};
pub use report::MabkReport;
pub use sweep::{sweep, SweepPoint, SweepResult};
pub use witness::{
    FourSettingWitness, SingleCircuitWitness, Strategy, WitnessEvaluation, WitnessStrategy,
    WitnessTerm,
};
