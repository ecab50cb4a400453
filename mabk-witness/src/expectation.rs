//! Aggregation of outcome counts into expectation values

use crate::{Result, WitnessError};
use mabk_backend::OutcomeCounts;

/// +1 for an even number of `'1'` characters, -1 otherwise
#[inline]
pub fn parity_sign(outcome: &str) -> f64 {
    if outcome.bytes().filter(|&b| b == b'1').count() % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Parity expectation `Σ sign(outcome) · count / shots`
///
/// # Errors
/// [`WitnessError::DegenerateShots`] when `shots` is zero.
///
/// # Example
/// ```
/// use mabk_backend::OutcomeCounts;
/// use mabk_witness::expectation::expectation;
///
/// let counts = OutcomeCounts::from_counts([("000", 3), ("001", 1)], 4).unwrap();
/// assert_eq!(expectation(&counts, 4).unwrap(), 0.5);
/// ```
pub fn expectation(counts: &OutcomeCounts, shots: usize) -> Result<f64> {
    if shots == 0 {
        return Err(WitnessError::DegenerateShots);
    }
    let signed: f64 = counts
        .iter()
        .map(|(outcome, count)| parity_sign(outcome) * count as f64)
        .sum();
    Ok(signed / shots as f64)
}

/// Relative frequency of one outcome, zero if it never occurred
pub fn probability(counts: &OutcomeCounts, outcome: &str, shots: usize) -> Result<f64> {
    if shots == 0 {
        return Err(WitnessError::DegenerateShots);
    }
    Ok(counts.get(outcome) as f64 / shots as f64)
}

/// Weighted sum `Σ c_k · E_k`
pub fn witness(expectations: &[f64], coefficients: &[f64]) -> Result<f64> {
    if expectations.len() != coefficients.len() {
        return Err(WitnessError::CoefficientMismatch {
            expectations: expectations.len(),
            coefficients: coefficients.len(),
        });
    }
    Ok(expectations
        .iter()
        .zip(coefficients)
        .map(|(e, c)| e * c)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn counts(pairs: &[(&str, usize)]) -> OutcomeCounts {
        let shots = pairs.iter().map(|(_, c)| c).sum();
        OutcomeCounts::from_counts(pairs.iter().copied(), shots).unwrap()
    }

    #[test]
    fn test_parity_sign() {
        assert_eq!(parity_sign("000"), 1.0);
        assert_eq!(parity_sign("011"), 1.0);
        assert_eq!(parity_sign("001"), -1.0);
        assert_eq!(parity_sign("111"), -1.0);
    }

    #[test]
    fn test_pure_even_outcome() {
        assert_eq!(expectation(&counts(&[("110", 500)]), 500).unwrap(), 1.0);
    }

    #[test]
    fn test_pure_odd_outcome() {
        assert_eq!(expectation(&counts(&[("100", 500)]), 500).unwrap(), -1.0);
    }

    #[test]
    fn test_balanced_outcomes() {
        let c = counts(&[("000", 250), ("111", 250)]);
        assert_relative_eq!(expectation(&c, 500).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_shots() {
        let c = counts(&[("000", 1)]);
        assert!(matches!(expectation(&c, 0), Err(WitnessError::DegenerateShots)));
        assert!(matches!(probability(&c, "000", 0), Err(WitnessError::DegenerateShots)));
    }

    #[test]
    fn test_probability_of_missing_outcome() {
        let c = counts(&[("000", 3), ("111", 1)]);
        assert_relative_eq!(probability(&c, "000", 4).unwrap(), 0.75);
        assert_eq!(probability(&c, "010", 4).unwrap(), 0.0);
    }

    #[test]
    fn test_witness_sum() {
        let value = witness(&[1.0, -1.0, -1.0, -1.0], &[1.0, -1.0, -1.0, -1.0]).unwrap();
        assert_relative_eq!(value, 4.0);
        let plain = witness(&[1.0, -1.0, -1.0, -1.0], &[1.0; 4]).unwrap();
        assert_relative_eq!(plain, -2.0);
    }

    #[test]
    fn test_witness_length_mismatch() {
        let err = witness(&[1.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            WitnessError::CoefficientMismatch {
                expectations: 2,
                coefficients: 1
            }
        ));
    }
}
