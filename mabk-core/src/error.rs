//! Error types for circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building circuits or parsing bases
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Circuit has no qubits
    #[error("Circuit must have at least one qubit")]
    EmptyCircuit,

    /// Duplicate qubit in gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Measurement basis symbol outside {X, Y, Z}
    #[error("Invalid measurement basis '{symbol}': expected one of X, Y, Z")]
    InvalidBasis { symbol: String },

    /// Generic circuit validation error
    #[error("Circuit validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create an invalid basis error
    pub fn invalid_basis(symbol: impl Into<String>) -> Self {
        Self::InvalidBasis {
            symbol: symbol.into(),
        }
    }
}
