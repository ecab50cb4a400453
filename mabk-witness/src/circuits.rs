//! Circuit construction for the witness pipeline
//!
//! Every builder is a pure function returning a fresh [`Circuit`]; nothing
//! is cached or shared between calls.

use crate::{Result, WitnessError};
use mabk_core::{Basis, BasisSetting, Circuit, QuantumError, QubitId};
use mabk_gates::standard::{CNot, Hadamard, RotationZ, SGateDagger};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Width of every circuit this crate builds
pub const NUM_QUBITS: usize = 3;

/// Entangling layout used to prepare (|000⟩ + |111⟩)/√2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GhzTopology {
    /// CNOT(0→1), CNOT(0→2)
    #[default]
    Star,
    /// CNOT(0→1), CNOT(1→2)
    Chain,
}

impl GhzTopology {
    /// Control/target pairs after the initial Hadamard on qubit 0
    pub const fn cnot_pairs(self) -> [(usize, usize); 2] {
        match self {
            GhzTopology::Star => [(0, 1), (0, 2)],
            GhzTopology::Chain => [(0, 1), (1, 2)],
        }
    }
}

impl fmt::Display for GhzTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GhzTopology::Star => write!(f, "star"),
            GhzTopology::Chain => write!(f, "chain"),
        }
    }
}

impl FromStr for GhzTopology {
    type Err = WitnessError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "star" => Ok(GhzTopology::Star),
            "chain" => Ok(GhzTopology::Chain),
            other => Err(WitnessError::config(format!(
                "unknown GHZ topology '{other}', expected 'star' or 'chain'"
            ))),
        }
    }
}

/// GHZ preparation: H on qubit 0, CNOT(0→1), CNOT(0→2)
///
/// # Example
/// ```
/// use mabk_witness::circuits::build_ghz_circuit;
///
/// let circuit = build_ghz_circuit().unwrap();
/// assert_eq!(circuit.gate_names(), vec!["H", "CNOT", "CNOT"]);
/// ```
pub fn build_ghz_circuit() -> Result<Circuit> {
    build_ghz_circuit_with(GhzTopology::Star)
}

/// GHZ preparation with an explicit CNOT layout
pub fn build_ghz_circuit_with(topology: GhzTopology) -> Result<Circuit> {
    let mut circuit = Circuit::new(NUM_QUBITS);
    circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)])?;
    for (control, target) in topology.cnot_pairs() {
        circuit.add_gate(Arc::new(CNot), &[QubitId::new(control), QubitId::new(target)])?;
    }
    Ok(circuit)
}

/// Append the rotations that map `setting` onto a computational readout
///
/// X → H, Y → S† then H, Z → nothing. Existing operations are left
/// untouched. A setting wider than the circuit is rejected.
pub fn apply_basis_rotation(mut circuit: Circuit, setting: &BasisSetting) -> Result<Circuit> {
    if setting.len() > circuit.num_qubits() {
        return Err(QuantumError::invalid_qubit(setting.len() - 1, circuit.num_qubits()).into());
    }

    for (index, basis) in setting.iter().filter(|(_, basis)| basis.needs_rotation()) {
        let qubit = [QubitId::new(index)];
        if basis == Basis::Y {
            circuit.add_gate(Arc::new(SGateDagger), &qubit)?;
        }
        circuit.add_gate(Arc::new(Hadamard), &qubit)?;
    }

    Ok(circuit)
}

/// One rotated copy of `base` per setting, in the order given
pub fn rotated_circuits(base: &Circuit, settings: &[BasisSetting]) -> Result<Vec<Circuit>> {
    settings
        .iter()
        .map(|setting| apply_basis_rotation(base.clone(), setting))
        .collect()
}

/// Parse setting strings such as `"XYY"`, failing on the first bad symbol
pub fn parse_settings<S: AsRef<str>>(settings: &[S]) -> Result<Vec<BasisSetting>> {
    settings
        .iter()
        .map(|s| s.as_ref().parse::<BasisSetting>().map_err(WitnessError::from))
        .collect()
}

/// GHZ state followed by RZ(θ_a), RZ(θ_b), RZ(θ_c) on qubits 0, 1, 2
pub fn mabk_operator_circuit(angles: [f64; 3], topology: GhzTopology) -> Result<Circuit> {
    let mut circuit = build_ghz_circuit_with(topology)?;
    for (index, theta) in angles.into_iter().enumerate() {
        circuit.add_gate(Arc::new(RotationZ::new(theta)), &[QubitId::new(index)])?;
    }
    Ok(circuit)
}
