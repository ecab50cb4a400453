//! Unitarity checks for every gate the witness circuits use

use approx::assert_relative_eq;
use mabk_core::Gate;
use mabk_gates::standard::{CNot, Hadamard, PauliX, RotationZ, SGateDagger};
use num_complex::Complex64;

fn assert_unitary(gate: &dyn Gate) {
    let matrix = gate.matrix().expect("gate exposes a matrix");
    let dim = 1usize << gate.num_qubits();
    assert_eq!(matrix.len(), dim * dim);

    for i in 0..dim {
        for j in 0..dim {
            let mut sum = Complex64::new(0.0, 0.0);
            for k in 0..dim {
                sum += matrix[k * dim + i].conj() * matrix[k * dim + j];
            }
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(sum.re, expected, epsilon = 1e-12);
            assert_relative_eq!(sum.im, 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_fixed_gates_are_unitary() {
    assert_unitary(&Hadamard);
    assert_unitary(&PauliX);
    assert_unitary(&SGateDagger);
    assert_unitary(&CNot);
}

#[test]
fn test_rotation_z_is_unitary_across_angles() {
    for step in 0..=8 {
        let theta = step as f64 * std::f64::consts::PI / 4.0;
        assert_unitary(&RotationZ::new(theta));
    }
}

#[test]
fn test_y_readout_rotation_maps_y_eigenstate() {
    // S† then H takes (|0⟩ + i|1⟩)/√2 to |0⟩
    let h = Hadamard.matrix().unwrap();
    let sdg = SGateDagger.matrix().unwrap();
    let amp = std::f64::consts::FRAC_1_SQRT_2;
    let psi = [Complex64::new(amp, 0.0), Complex64::new(0.0, amp)];

    let apply = |m: &[Complex64], v: [Complex64; 2]| {
        [m[0] * v[0] + m[1] * v[1], m[2] * v[0] + m[3] * v[1]]
    };
    let out = apply(&h, apply(&sdg, psi));

    assert_relative_eq!(out[0].norm_sqr(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(out[1].norm_sqr(), 0.0, epsilon = 1e-12);
}
