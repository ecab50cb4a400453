//! Dense quantum state with computational-basis sampling
//!
//! [`StateVector`] holds the `2^n` amplitudes of an `n`-qubit register.
//! Basis index bit `k` is the value of qubit `k`, so formatting an index as
//! an `n`-digit binary string puts qubit 0 in the rightmost position.
//!
//! # Example
//!
//! ```
//! use mabk_state::{kernels, ComputationalBasis, StateVector};
//! use num_complex::Complex64;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let h = std::f64::consts::FRAC_1_SQRT_2;
//! let hadamard = [
//!     [Complex64::new(h, 0.0), Complex64::new(h, 0.0)],
//!     [Complex64::new(h, 0.0), Complex64::new(-h, 0.0)],
//! ];
//!
//! let mut state = StateVector::new(1).unwrap();
//! kernels::apply_single_qubit(&hadamard, 0, state.amplitudes_mut()).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = ComputationalBasis::new().sample(&state, 100, &mut rng).unwrap();
//! assert_eq!(result.shots, 100);
//! ```

pub mod error;
pub mod kernels;
pub mod measurement;
pub mod state_vector;

pub use error::{Result, StateError};
pub use measurement::{ComputationalBasis, SamplingResult};
pub use state_vector::StateVector;
