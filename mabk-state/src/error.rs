//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Invalid state dimension
    #[error("Invalid state dimension {dimension}, expected power of 2")]
    InvalidDimension { dimension: usize },

    /// Register wider than the dense representation allows
    #[error("Cannot allocate a dense state for {num_qubits} qubits (max {max_qubits})")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    /// State not normalized
    #[error("State vector not normalized, norm = {norm}")]
    NotNormalized { norm: f64 },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Two-qubit kernel called with the same qubit twice
    #[error("Two-qubit gate needs distinct qubits, got {0} twice")]
    RepeatedQubit(usize),
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
