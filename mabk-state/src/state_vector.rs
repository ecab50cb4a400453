//! Dense state vector

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Widest register the dense representation accepts
pub const MAX_DENSE_QUBITS: usize = 30;

/// Quantum state as a complex amplitude vector of length `2^n`
///
/// # Example
///
/// ```
/// use mabk_state::StateVector;
///
/// let state = StateVector::new(3).unwrap();
/// assert_eq!(state.dimension(), 8);
/// assert_eq!(state.probability(0), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns error if `num_qubits` is zero or above [`MAX_DENSE_QUBITS`]
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(StateError::InvalidDimension { dimension: 0 });
        }
        if num_qubits > MAX_DENSE_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_DENSE_QUBITS,
            });
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitudes
    ///
    /// # Errors
    /// Returns error if the length is not `2^num_qubits`
    pub fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Complex64>) -> Result<Self> {
        if num_qubits > MAX_DENSE_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_DENSE_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get a mutable reference to the amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Probability of basis state `index`
    #[inline]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, |a| a.norm_sqr())
    }

    /// Probabilities of every basis state, indexed like the amplitudes
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check that |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Error if the state drifted away from unit norm
    pub fn check_normalized(&self, epsilon: f64) -> Result<()> {
        if self.is_normalized(epsilon) {
            Ok(())
        } else {
            Err(StateError::NotNormalized { norm: self.norm() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
        assert!(state.amplitudes()[1..]
            .iter()
            .all(|a| *a == Complex64::new(0.0, 0.0)));
        assert!(state.is_normalized(1e-12));
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert_eq!(
            StateVector::new(0).unwrap_err(),
            StateError::InvalidDimension { dimension: 0 }
        );
    }

    #[test]
    fn test_too_many_qubits_rejected() {
        assert!(matches!(
            StateVector::new(MAX_DENSE_QUBITS + 1),
            Err(StateError::TooManyQubits { .. })
        ));
    }

    #[test]
    fn test_from_amplitudes_dimension_mismatch() {
        let result = StateVector::from_amplitudes(2, vec![Complex64::new(1.0, 0.0)]);
        assert_eq!(
            result.unwrap_err(),
            StateError::DimensionMismatch {
                expected: 4,
                actual: 1
            }
        );
    }

    #[test]
    fn test_probabilities() {
        let half = Complex64::new(0.5, 0.0);
        let state = StateVector::from_amplitudes(2, vec![half; 4]).unwrap();
        assert_relative_eq!(state.probability(3), 0.25);
        assert_eq!(state.probability(9), 0.0);
        assert_eq!(state.probabilities(), vec![0.25; 4]);
        assert!(state.check_normalized(1e-12).is_ok());
    }

    #[test]
    fn test_not_normalized() {
        let one = Complex64::new(1.0, 0.0);
        let state = StateVector::from_amplitudes(1, vec![one, one]).unwrap();
        assert!(matches!(
            state.check_normalized(1e-9),
            Err(StateError::NotNormalized { .. })
        ));
    }
}
