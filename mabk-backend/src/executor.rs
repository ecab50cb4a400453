//! Circuit evolution on a dense state vector

use crate::{BackendError, Result};
use mabk_core::{Circuit, GateOp};
use mabk_state::{kernels, StateVector};
use tracing::trace;

/// Tolerance for the post-evolution normalisation check
const NORM_TOLERANCE: f64 = 1e-9;

/// Apply every gate of `circuit` to |0...0⟩ and return the final state
///
/// # Errors
///
/// Returns [`BackendError::UnsupportedGate`] for gates without a matrix or
/// with more than two qubits, and state errors for invalid operands.
pub fn simulate(circuit: &Circuit) -> Result<StateVector> {
    circuit.validate()?;

    let mut state = StateVector::new(circuit.num_qubits())?;
    for op in circuit.operations() {
        trace!(gate = %op, "applying gate");
        apply_gate(op, &mut state)?;
    }

    state.check_normalized(NORM_TOLERANCE)?;
    Ok(state)
}

fn apply_gate(op: &GateOp, state: &mut StateVector) -> Result<()> {
    let gate = op.gate();
    let matrix = gate.matrix().ok_or_else(|| BackendError::UnsupportedGate {
        gate: gate.name().to_string(),
        reason: "no matrix representation".to_string(),
    })?;
    let malformed = || BackendError::UnsupportedGate {
        gate: gate.name().to_string(),
        reason: format!("matrix has {} entries", matrix.len()),
    };

    match op.qubits() {
        [q] => {
            let m = kernels::to_matrix2(&matrix).ok_or_else(malformed)?;
            kernels::apply_single_qubit(&m, q.index(), state.amplitudes_mut())?;
        }
        [q1, q2] => {
            let m = kernels::to_matrix4(&matrix).ok_or_else(malformed)?;
            kernels::apply_two_qubit(&m, q1.index(), q2.index(), state.amplitudes_mut())?;
        }
        qubits => {
            return Err(BackendError::UnsupportedGate {
                gate: gate.name().to_string(),
                reason: format!("{}-qubit gates are not supported", qubits.len()),
            })
        }
    }

    Ok(())
}
