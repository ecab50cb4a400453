//! Sampling backends for the MABK witness toolkit
//!
//! Every backend implements [`Sampler`]: a batch of circuits plus a shot
//! budget goes in, one [`OutcomeCounts`] per circuit comes out in the same
//! order. The pipeline never talks to a simulator directly, so tests can
//! swap in deterministic fakes.
//!
//! [`LocalSimulatorBackend`] is the built-in implementation: it evolves a
//! dense state vector and samples shots from it.
//!
//! # Example
//!
//! ```
//! use mabk_backend::{LocalSimulatorBackend, LocalSimulatorConfig, Sampler};
//! use mabk_core::{Circuit, QubitId};
//! use mabk_gates::standard::Hadamard;
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(1);
//! circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
//!
//! let backend = LocalSimulatorBackend::with_config(LocalSimulatorConfig::default().with_seed(1));
//! let results = backend.run(&[circuit], 100).unwrap();
//! assert_eq!(results[0].total(), 100);
//! ```

pub mod error;
pub mod executor;
pub mod local_simulator;
pub mod result;
pub mod sampler;

pub use error::{BackendError, Result};
pub use local_simulator::{LocalSimulatorBackend, LocalSimulatorConfig};
pub use result::OutcomeCounts;
pub use sampler::Sampler;
