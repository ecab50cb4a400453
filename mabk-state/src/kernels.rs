//! Gate application kernels for dense state vectors
//!
//! Qubit `k` corresponds to bit `k` of the basis index. Two-qubit matrices
//! treat the first qubit as the high bit of the local index, so a CNOT
//! matrix applied to `(control, target)` flips `target` when `control` is set.

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// 2x2 gate matrix
pub type Matrix2x2 = [[Complex64; 2]; 2];

/// 4x4 gate matrix
pub type Matrix4x4 = [[Complex64; 4]; 4];

/// Register width implied by a state slice
#[inline]
fn width(state: &[Complex64]) -> Result<usize> {
    let n = state.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(StateError::InvalidDimension { dimension: n });
    }
    Ok(n.trailing_zeros() as usize)
}

#[inline]
fn check_qubit(qubit: usize, num_qubits: usize) -> Result<()> {
    if qubit >= num_qubits {
        return Err(StateError::InvalidQubitIndex {
            index: qubit,
            num_qubits,
        });
    }
    Ok(())
}

/// Apply a single-qubit gate to `qubit`
///
/// # Errors
///
/// Returns an error if the qubit index is out of bounds or the slice length
/// is not a power of two.
pub fn apply_single_qubit(gate: &Matrix2x2, qubit: usize, state: &mut [Complex64]) -> Result<()> {
    let num_qubits = width(state)?;
    check_qubit(qubit, num_qubits)?;

    let stride = 1 << qubit;
    let n = state.len();
    let mut i = 0;

    while i < n {
        for j in 0..stride {
            let idx0 = i + j;
            let idx1 = idx0 + stride;

            let a = state[idx0];
            let b = state[idx1];

            state[idx0] = gate[0][0] * a + gate[0][1] * b;
            state[idx1] = gate[1][0] * a + gate[1][1] * b;
        }
        i += stride * 2;
    }

    Ok(())
}

/// Apply a general two-qubit gate to `(qubit1, qubit2)`
///
/// # Errors
///
/// Returns an error if either index is out of bounds or both are equal.
pub fn apply_two_qubit(
    gate: &Matrix4x4,
    qubit1: usize,
    qubit2: usize,
    state: &mut [Complex64],
) -> Result<()> {
    let num_qubits = width(state)?;
    check_qubit(qubit1, num_qubits)?;
    check_qubit(qubit2, num_qubits)?;
    if qubit1 == qubit2 {
        return Err(StateError::RepeatedQubit(qubit1));
    }

    let mask1 = 1 << qubit1;
    let mask2 = 1 << qubit2;

    for base in 0..state.len() {
        if base & (mask1 | mask2) != 0 {
            continue;
        }

        // local index = (bit of qubit1) << 1 | (bit of qubit2)
        let idx = [base, base | mask2, base | mask1, base | mask1 | mask2];
        let a = idx.map(|i| state[i]);

        for (row, &out) in idx.iter().enumerate() {
            state[out] = gate[row]
                .iter()
                .zip(a.iter())
                .map(|(g, amp)| g * amp)
                .sum();
        }
    }

    Ok(())
}

/// Reshape a row-major flat matrix into a 2x2 array
pub fn to_matrix2(flat: &[Complex64]) -> Option<Matrix2x2> {
    match flat {
        [a, b, c, d] => Some([[*a, *b], [*c, *d]]),
        _ => None,
    }
}

/// Reshape a row-major flat matrix into a 4x4 array
pub fn to_matrix4(flat: &[Complex64]) -> Option<Matrix4x4> {
    if flat.len() != 16 {
        return None;
    }
    let mut m = [[Complex64::new(0.0, 0.0); 4]; 4];
    for (i, row) in m.iter_mut().enumerate() {
        row.copy_from_slice(&flat[i * 4..i * 4 + 4]);
    }
    Some(m)
}
