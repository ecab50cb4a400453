//! Error types for witness evaluation

use mabk_backend::BackendError;
use mabk_core::QuantumError;
use thiserror::Error;

/// Result type for witness operations
pub type Result<T> = std::result::Result<T, WitnessError>;

/// Errors raised while building, running or reporting a witness
#[derive(Error, Debug)]
pub enum WitnessError {
    /// Unknown measurement basis symbol
    #[error("Invalid basis symbol: {symbol}")]
    InvalidBasis { symbol: String },

    /// Malformed circuit
    #[error("Circuit error: {0}")]
    Circuit(QuantumError),

    /// The sampler failed; never retried
    #[error("Simulation error: {0}")]
    Simulation(#[from] BackendError),

    /// Aggregation over zero shots
    #[error("Cannot aggregate over zero shots")]
    DegenerateShots,

    /// Expectation and coefficient lists differ in length
    #[error("Coefficient mismatch: {expectations} expectations, {coefficients} coefficients")]
    CoefficientMismatch {
        expectations: usize,
        coefficients: usize,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to write a report or plot
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a report
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WitnessError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<QuantumError> for WitnessError {
    fn from(err: QuantumError) -> Self {
        match err {
            QuantumError::InvalidBasis { symbol } => Self::InvalidBasis { symbol },
            other => Self::Circuit(other),
        }
    }
}
