//! Error types for backend operations

use thiserror::Error;

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors raised while executing circuits on a sampler
///
/// None of these are retried; the caller decides what to do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// Shot budget of zero
    #[error("Shot count must be positive, got {0}")]
    InvalidShots(usize),

    /// Backend capabilities exceeded
    #[error("Backend capability exceeded: {0}")]
    CapabilityExceeded(String),

    /// Gate the backend cannot execute
    #[error("Unsupported gate '{gate}': {reason}")]
    UnsupportedGate { gate: String, reason: String },

    /// Simulation failed while evolving or sampling a circuit
    #[error("Simulation failed for circuit {circuit}: {reason}")]
    SimulationFailed { circuit: usize, reason: String },

    /// Outcome counts do not add up to the shot budget
    #[error("Outcome counts sum to {actual}, expected {expected} shots")]
    ResultCountMismatch { expected: usize, actual: usize },

    /// Outcome key with the wrong width or characters other than 0/1
    #[error("Malformed outcome '{0}'")]
    MalformedOutcome(String),

    /// Sampler returned a different number of results than circuits submitted
    #[error("Sampler returned {actual} results for {expected} circuits")]
    BatchSizeMismatch { expected: usize, actual: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Circuit construction error
    #[error("Circuit error: {0}")]
    Circuit(#[from] mabk_core::QuantumError),

    /// State vector error
    #[error("State error: {0}")]
    State(#[from] mabk_state::StateError),
}

impl BackendError {
    /// Create a simulation failure for circuit `circuit` of a batch
    pub fn simulation_failed(circuit: usize, reason: impl Into<String>) -> Self {
        Self::SimulationFailed {
            circuit,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BackendError::InvalidShots(0).to_string(),
            "Shot count must be positive, got 0"
        );
        assert_eq!(
            BackendError::simulation_failed(2, "boom").to_string(),
            "Simulation failed for circuit 2: boom"
        );
    }

    #[test]
    fn test_from_core_error() {
        let err: BackendError = mabk_core::QuantumError::EmptyCircuit.into();
        assert!(matches!(err, BackendError::Circuit(_)));
    }
}
