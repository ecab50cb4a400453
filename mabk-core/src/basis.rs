//! Measurement bases
//!
//! A [`BasisSetting`] lists one Pauli basis per qubit. Qubits measured in
//! `X` or `Y` need a rotation before the computational-basis readout; `Z`
//! needs nothing.

use crate::{QuantumError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Single-qubit measurement basis
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    X,
    Y,
    Z,
}

impl Basis {
    /// Symbol used in setting strings
    pub const fn symbol(self) -> char {
        match self {
            Basis::X => 'X',
            Basis::Y => 'Y',
            Basis::Z => 'Z',
        }
    }

    /// Whether a rotation must be appended before measurement
    pub const fn needs_rotation(self) -> bool {
        !matches!(self, Basis::Z)
    }
}

impl TryFrom<char> for Basis {
    type Error = QuantumError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            'X' => Ok(Basis::X),
            'Y' => Ok(Basis::Y),
            'Z' => Ok(Basis::Z),
            other => Err(QuantumError::invalid_basis(other.to_string())),
        }
    }
}

impl FromStr for Basis {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Basis::try_from(c).map_err(|_| QuantumError::invalid_basis(s)),
            _ => Err(QuantumError::invalid_basis(s)),
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered per-qubit measurement bases; entry `i` applies to qubit `i`
///
/// # Example
/// ```
/// use mabk_core::{Basis, BasisSetting};
///
/// let setting: BasisSetting = "YXY".parse().unwrap();
/// assert_eq!(setting.get(1), Some(Basis::X));
/// assert_eq!(setting.to_string(), "YXY");
///
/// assert!("ZZ'".parse::<BasisSetting>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasisSetting {
    bases: SmallVec<[Basis; 3]>,
}

impl BasisSetting {
    /// Create a setting from explicit bases
    pub fn new(bases: impl IntoIterator<Item = Basis>) -> Self {
        Self {
            bases: bases.into_iter().collect(),
        }
    }

    /// Computational-basis readout on every qubit
    pub fn computational(num_qubits: usize) -> Self {
        Self::new(std::iter::repeat(Basis::Z).take(num_qubits))
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Whether the setting is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Basis for qubit `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<Basis> {
        self.bases.get(index).copied()
    }

    /// Iterate over `(qubit index, basis)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, Basis)> + '_ {
        self.bases.iter().copied().enumerate()
    }
}

impl FromStr for BasisSetting {
    type Err = QuantumError;

    /// Parses one symbol per qubit, e.g. `"XYY"`
    ///
    /// The whole input is reported on failure so the caller sees which
    /// setting was rejected.
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(Basis::try_from)
            .collect::<Result<SmallVec<[Basis; 3]>>>()
            .map(|bases| Self { bases })
            .map_err(|_| QuantumError::invalid_basis(s))
    }
}

impl fmt::Display for BasisSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for basis in &self.bases {
            write!(f, "{}", basis)?;
        }
        Ok(())
    }
}

impl From<[Basis; 3]> for BasisSetting {
    fn from(bases: [Basis; 3]) -> Self {
        Self::new(bases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_basis() {
        assert_eq!("X".parse::<Basis>().unwrap(), Basis::X);
        assert_eq!("Y".parse::<Basis>().unwrap(), Basis::Y);
        assert_eq!("Z".parse::<Basis>().unwrap(), Basis::Z);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "Z'".parse::<Basis>().unwrap_err();
        assert_eq!(err, QuantumError::invalid_basis("Z'"));

        assert!("x".parse::<Basis>().is_err());
        assert!("".parse::<Basis>().is_err());
        assert!(Basis::try_from('W').is_err());
    }

    #[test]
    fn test_parse_setting() {
        let setting: BasisSetting = "XYY".parse().unwrap();
        let bases: Vec<_> = setting.iter().collect();
        assert_eq!(bases, vec![(0, Basis::X), (1, Basis::Y), (2, Basis::Y)]);
        assert_eq!(setting.to_string(), "XYY");
    }

    #[test]
    fn test_parse_setting_reports_whole_input() {
        let err = "XZ'".parse::<BasisSetting>().unwrap_err();
        assert_eq!(err, QuantumError::invalid_basis("XZ'"));
    }

    #[test]
    fn test_computational_setting() {
        let setting = BasisSetting::computational(3);
        assert_eq!(setting.to_string(), "ZZZ");
        assert!(setting.iter().all(|(_, b)| !b.needs_rotation()));
    }

    #[test]
    fn test_from_array() {
        let setting = BasisSetting::from([Basis::Y, Basis::Y, Basis::X]);
        assert_eq!(setting.len(), 3);
        assert_eq!(setting.get(2), Some(Basis::X));
        assert_eq!(setting.get(3), None);
    }
}
