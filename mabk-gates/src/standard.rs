//! Standard gates used by the witness circuits

use crate::matrices;
use mabk_core::gate::Gate;
use num_complex::Complex64;

/// Implements the constant-matrix accessors for a fixed gate
macro_rules! impl_matrix_method {
    ($gate_type:ty, $matrix:expr, $size:expr) => {
        impl $gate_type {
            /// Returns the constant gate matrix
            #[inline]
            pub const fn matrix() -> &'static [[Complex64; $size]; $size] {
                $matrix
            }

            #[inline]
            fn matrix_vec() -> Vec<Complex64> {
                Self::matrix().iter().flatten().copied().collect()
            }
        }
    };
}

/// Hadamard gate
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2. Also the X-basis readout
/// rotation.
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl Gate for Hadamard {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(Hadamard, &matrices::HADAMARD, 2);

/// Pauli-X gate
#[derive(Debug, Clone, Copy)]
pub struct PauliX;

impl Gate for PauliX {
    fn name(&self) -> &str {
        "X"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(PauliX, &matrices::PAULI_X, 2);

/// S† gate
///
/// Phase correction applied before H for a Y-basis readout.
#[derive(Debug, Clone, Copy)]
pub struct SGateDagger;

impl Gate for SGateDagger {
    fn name(&self) -> &str {
        "S†"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(SGateDagger, &matrices::S_GATE_DAGGER, 2);

/// CNOT gate
///
/// Flips the target (second operand) when the control (first operand) is |1⟩.
#[derive(Debug, Clone, Copy)]
pub struct CNot;

impl Gate for CNot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(CNot, &matrices::CNOT, 4);

/// Rotation-Z gate
#[derive(Debug, Clone, Copy)]
pub struct RotationZ {
    theta: f64,
}

impl RotationZ {
    /// Creates a new RZ gate with the given angle
    pub const fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Returns the rotation angle
    pub const fn angle(&self) -> f64 {
        self.theta
    }
}

impl Gate for RotationZ {
    fn name(&self) -> &str {
        "RZ"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        format!("RZ({:.4})", self.theta)
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(
            matrices::rotation_z(self.theta)
                .iter()
                .flatten()
                .copied()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(Hadamard.name(), "H");
        assert_eq!(SGateDagger.name(), "S†");
        assert_eq!(CNot.name(), "CNOT");
        assert_eq!(RotationZ::new(0.5).name(), "RZ");
    }

    #[test]
    fn test_matrix_sizes() {
        assert_eq!(Hadamard.matrix().unwrap().len(), 4);
        assert_eq!(SGateDagger.matrix().unwrap().len(), 4);
        assert_eq!(CNot.matrix().unwrap().len(), 16);
    }

    #[test]
    fn test_rotation_description() {
        let rz = RotationZ::new(std::f64::consts::PI);
        assert_eq!(rz.description(), "RZ(3.1416)");
        assert_eq!(rz.angle(), std::f64::consts::PI);
    }
}
