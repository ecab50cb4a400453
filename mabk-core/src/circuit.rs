//! Quantum circuit representation

use crate::gate::Gate;
use crate::{GateOp, QuantumError, QubitId, Result};
use std::sync::Arc;

/// A quantum circuit
///
/// An ordered sequence of gate operations over a fixed number of qubit
/// slots. Circuits are plain values: cloning one and appending to the clone
/// leaves the original untouched.
///
/// # Example
/// ```
/// use mabk_core::Circuit;
///
/// let circuit = Circuit::new(3);
/// assert_eq!(circuit.num_qubits(), 3);
/// assert!(circuit.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create a new circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit has no operations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append a gate operation
    ///
    /// # Errors
    /// Returns error if any qubit index is out of bounds, the arity is wrong
    /// or a qubit is repeated.
    pub fn add_gate(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        for &qubit in qubits {
            if qubit.index() >= self.num_qubits {
                return Err(QuantumError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }

        let gate_op = GateOp::new(gate, qubits)?;
        self.operations.push(gate_op);
        Ok(())
    }

    /// Get an iterator over the operations
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Gate names in application order
    pub fn gate_names(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.gate().name()).collect()
    }

    /// Validate the circuit
    ///
    /// Checks that every operation addresses qubits inside the register.
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            for &qubit in op.qubits() {
                if qubit.index() >= self.num_qubits {
                    return Err(QuantumError::ValidationError(format!(
                        "Operation {} uses invalid qubit {}",
                        i, qubit
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Circuit({} qubits, {} operations)", self.num_qubits, self.len())?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
