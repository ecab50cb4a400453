//! Gate trait and gate operations

use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Trait for quantum gate operations
///
/// Gates are stateless values shared between circuits through `Arc`.
/// A sampler can only execute gates that expose a [`matrix`](Gate::matrix).
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "RZ")
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// Get a description of this gate
    fn description(&self) -> String {
        format!("{}-qubit gate '{}'", self.num_qubits(), self.name())
    }

    /// Unitary matrix in row-major order, `(2^n)^2` entries
    ///
    /// Returns `None` for gates without a matrix representation.
    fn matrix(&self) -> Option<Vec<Complex64>> {
        None
    }
}

/// A gate applied to specific qubits
///
/// For two-qubit gates the first qubit is the control.
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    qubits: SmallVec<[QubitId; 2]>,
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if the qubit count doesn't match the gate or a qubit
    /// appears twice.
    pub fn new(gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                gate.name(),
                gate.num_qubits(),
                qubits.len(),
            ));
        }

        for (i, q) in qubits.iter().enumerate() {
            if qubits[i + 1..].contains(q) {
                return Err(QuantumError::DuplicateQubit(*q));
            }
        }

        Ok(Self {
            gate,
            qubits: SmallVec::from_slice(qubits),
        })
    }

    /// Get the gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockGate {
        name: &'static str,
        num_qubits: usize,
    }

    impl Gate for MockGate {
        fn name(&self) -> &str {
            self.name
        }

        fn num_qubits(&self) -> usize {
            self.num_qubits
        }
    }

    fn cnot() -> Arc<dyn Gate> {
        Arc::new(MockGate {
            name: "CNOT",
            num_qubits: 2,
        })
    }

    #[test]
    fn test_gate_op_invalid_qubit_count() {
        let result = GateOp::new(cnot(), &[QubitId::new(0)]);

        match result {
            Err(QuantumError::InvalidQubitCount {
                gate,
                expected,
                actual,
            }) => {
                assert_eq!(gate, "CNOT");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected InvalidQubitCount error, got {:?}", other),
        }
    }

    #[test]
    fn test_gate_op_duplicate_qubits() {
        let q0 = QubitId::new(0);
        let result = GateOp::new(cnot(), &[q0, q0]);
        assert!(matches!(result, Err(QuantumError::DuplicateQubit(_))));
    }

    #[test]
    fn test_gate_op_display() {
        let op = GateOp::new(cnot(), &[QubitId::new(0), QubitId::new(2)]).unwrap();
        assert_eq!(op.to_string(), "CNOT(q0, q2)");
        assert_eq!(op.num_qubits(), 2);
    }

    #[test]
    fn test_default_matrix_is_none() {
        assert!(cnot().matrix().is_none());
        assert_eq!(cnot().description(), "2-qubit gate 'CNOT'");
    }
}
