//! Core types for the MABK witness toolkit
//!
//! This crate provides the building blocks every other stage works with:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: Trait for quantum operations
//! - [`Circuit`]: Ordered gate sequence over a fixed register
//! - [`Basis`] / [`BasisSetting`]: Per-qubit measurement bases
//!
//! # Example
//! ```
//! use mabk_core::{BasisSetting, Circuit};
//!
//! let circuit = Circuit::new(3);
//! assert_eq!(circuit.num_qubits(), 3);
//!
//! let setting: BasisSetting = "XYY".parse().unwrap();
//! assert_eq!(setting.len(), 3);
//! ```

pub mod basis;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

// Re-exports for convenience
pub use basis::{Basis, BasisSetting};
pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{Gate, GateOp};
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Type alias for results in the core crate
pub type Result<T> = std::result::Result<T, QuantumError>;
