//! Local state-vector sampler
//!
//! Evolves each circuit exactly on a dense state vector, then draws shots
//! from the final probability distribution.
//!
//! # Example
//!
//! ```
//! use mabk_backend::{LocalSimulatorBackend, LocalSimulatorConfig, Sampler};
//!
//! let backend = LocalSimulatorBackend::with_config(
//!     LocalSimulatorConfig::default().with_seed(42).with_max_qubits(8),
//! );
//! assert_eq!(backend.name(), "LocalSimulator");
//! ```

use crate::{executor, BackendError, OutcomeCounts, Result, Sampler};
use mabk_core::Circuit;
use mabk_state::state_vector::MAX_DENSE_QUBITS;
use mabk_state::ComputationalBasis;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, debug_span};

const BACKEND_NAME: &str = "LocalSimulator";

/// Configuration for the local simulator backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSimulatorConfig {
    /// Seed for reproducible sampling; `None` draws from OS entropy
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// Widest circuit the backend accepts
    ///
    /// Default: 24
    pub max_qubits: usize,
}

impl Default for LocalSimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_qubits: 24,
        }
    }
}

impl LocalSimulatorConfig {
    /// Set the random seed for deterministic sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the widest accepted circuit
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_DENSE_QUBITS {
            return Err(BackendError::InvalidConfiguration(format!(
                "max_qubits must be in 1..={}, got {}",
                MAX_DENSE_QUBITS, self.max_qubits
            )));
        }
        Ok(())
    }
}

/// Sampler backed by exact state-vector evolution
#[derive(Debug, Clone)]
pub struct LocalSimulatorBackend {
    config: LocalSimulatorConfig,
}

impl LocalSimulatorBackend {
    /// Create a backend with default configuration
    pub fn new() -> Self {
        Self::with_config(LocalSimulatorConfig::default())
    }

    /// Create a backend with custom configuration
    ///
    /// The configuration is checked on every [`run`](Sampler::run); use
    /// [`LocalSimulatorBackend::try_with_config`] to fail early.
    pub fn with_config(config: LocalSimulatorConfig) -> Self {
        Self { config }
    }

    /// Create a backend, rejecting an invalid configuration
    pub fn try_with_config(config: LocalSimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Get the configuration
    pub fn config(&self) -> &LocalSimulatorConfig {
        &self.config
    }

    fn validate_circuit(&self, index: usize, circuit: &Circuit) -> Result<()> {
        if circuit.num_qubits() > self.config.max_qubits {
            return Err(BackendError::CapabilityExceeded(format!(
                "circuit {} requires {} qubits, backend supports max {}",
                index,
                circuit.num_qubits(),
                self.config.max_qubits
            )));
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for LocalSimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for LocalSimulatorBackend {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn run(&self, circuits: &[Circuit], shots: usize) -> Result<Vec<OutcomeCounts>> {
        let _span = debug_span!("sampler_run", backend = BACKEND_NAME, circuits = circuits.len(), shots)
            .entered();

        self.config.validate()?;
        if shots == 0 {
            return Err(BackendError::InvalidShots(shots));
        }
        for (index, circuit) in circuits.iter().enumerate() {
            self.validate_circuit(index, circuit)?;
        }

        let start = Instant::now();
        let mut rng = self.rng();
        let measurement = ComputationalBasis::new();

        let results = circuits
            .iter()
            .enumerate()
            .map(|(index, circuit)| {
                let state = executor::simulate(circuit).map_err(|e| match e {
                    BackendError::State(inner) => {
                        BackendError::simulation_failed(index, inner.to_string())
                    }
                    other => other,
                })?;

                let sampled = measurement
                    .sample(&state, shots, &mut rng)
                    .map_err(|e| BackendError::simulation_failed(index, e.to_string()))?;

                OutcomeCounts::from_counts(sampled.to_bitstring_counts(circuit.num_qubits()), shots)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(elapsed_us = start.elapsed().as_micros() as u64, "batch sampled");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mabk_core::QubitId;
    use mabk_gates::standard::{Hadamard, PauliX};
    use std::sync::Arc;

    fn x_circuit() -> Circuit {
        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(PauliX), &[QubitId::new(0)]).unwrap();
        circuit
    }

    #[test]
    fn test_backend_creation() {
        let backend = LocalSimulatorBackend::new();
        assert_eq!(backend.name(), "LocalSimulator");
        assert_eq!(backend.config().max_qubits, 24);
    }

    #[test]
    fn test_zero_shots_rejected() {
        let backend = LocalSimulatorBackend::new();
        assert_eq!(
            backend.run(&[x_circuit()], 0).unwrap_err(),
            BackendError::InvalidShots(0)
        );
    }

    #[test]
    fn test_circuit_too_wide() {
        let backend =
            LocalSimulatorBackend::with_config(LocalSimulatorConfig::default().with_max_qubits(2));
        let err = backend.run(&[Circuit::new(3)], 10).unwrap_err();
        assert!(matches!(err, BackendError::CapabilityExceeded(_)));
    }

    #[test]
    fn test_invalid_config() {
        let config = LocalSimulatorConfig::default().with_max_qubits(0);
        assert!(config.validate().is_err());
        assert!(LocalSimulatorBackend::try_with_config(config).is_err());
    }

    #[test]
    fn test_deterministic_outcome() {
        let backend = LocalSimulatorBackend::new();
        let result = backend.run_one(&x_circuit(), 100).unwrap();
        assert_eq!(result.get("01"), 100);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_reproducibility_with_seed() {
        let config = LocalSimulatorConfig::default().with_seed(42);
        let backend1 = LocalSimulatorBackend::with_config(config.clone());
        let backend2 = LocalSimulatorBackend::with_config(config);

        let mut circuit = Circuit::new(2);
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(1)]).unwrap();

        let result1 = backend1.run(&[circuit.clone()], 500).unwrap();
        let result2 = backend2.run(&[circuit], 500).unwrap();
        assert_eq!(result1, result2);
    }
}
