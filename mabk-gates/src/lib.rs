//! Quantum gate library for the MABK witness toolkit
//!
//! Fixed gates (H, X, S†, CNOT) use constant matrices; the parameterised
//! RZ rotation computes its matrix from the angle. All gates implement
//! [`mabk_core::Gate`] and expose a matrix so the state-vector sampler can
//! apply them.
//!
//! # Example
//!
//! ```
//! use mabk_gates::standard::{CNot, Hadamard, RotationZ};
//! use mabk_core::Gate;
//! use std::f64::consts::PI;
//!
//! assert_eq!(Hadamard.num_qubits(), 1);
//! assert_eq!(CNot.num_qubits(), 2);
//!
//! let rz = RotationZ::new(PI / 2.0);
//! assert_eq!(rz.matrix().unwrap().len(), 4);
//! ```

pub mod matrices;
pub mod standard;

pub use standard::*;
