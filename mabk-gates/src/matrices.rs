//! Constant gate matrices
//!
//! Two-qubit matrices use the first operand (control) as the high bit of the
//! local 2-bit index.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// S† gate matrix
/// S† = [[1,  0],
///       [0, -i]]
pub const S_GATE_DAGGER: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_I]];

/// CNOT gate matrix, control on the high bit
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// Rotation-Z matrix for angle θ
/// RZ(θ) = [[e^(-iθ/2),  0       ],
///          [0,          e^(iθ/2)]]
#[inline]
pub fn rotation_z(theta: f64) -> [[Complex64; 2]; 2] {
    let half_theta = theta / 2.0;
    [
        [Complex64::new(half_theta.cos(), -half_theta.sin()), ZERO],
        [ZERO, Complex64::new(half_theta.cos(), half_theta.sin())],
    ]
}
