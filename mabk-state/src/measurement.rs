//! Computational-basis measurement with multi-shot sampling
//!
//! Sampling is non-destructive: the state is read, never collapsed. Many
//! shots from one distribution use Walker's alias method, O(2^n) setup and
//! O(1) per shot.

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use rand::Rng;
use std::collections::HashMap;

/// Probabilities below this are treated as zero when sampling
const PROBABILITY_FLOOR: f64 = 1e-12;

/// Format a basis index as an `num_qubits`-character bit string
///
/// Qubit 0 is the rightmost character.
///
/// ```
/// assert_eq!(mabk_state::measurement::format_outcome(0b011, 3), "011");
/// ```
#[inline]
pub fn format_outcome(outcome: u64, num_qubits: usize) -> String {
    format!("{:0width$b}", outcome, width = num_qubits)
}

/// Counts from multiple measurement shots
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingResult {
    /// Map from basis state index to count
    pub counts: HashMap<u64, usize>,

    /// Total number of shots
    pub shots: usize,
}

impl SamplingResult {
    /// Create an empty sampling result
    pub fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    /// Record one outcome
    pub fn add_outcome(&mut self, outcome: u64) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Count for a specific outcome
    pub fn get_count(&self, outcome: u64) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Sum of all recorded counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Convert counts to bit-string keys
    pub fn to_bitstring_counts(&self, num_qubits: usize) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (format_outcome(outcome, num_qubits), count))
            .collect()
    }
}

/// Measures every qubit in the computational (Z) basis
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputationalBasis;

impl ComputationalBasis {
    /// Create a full-register measurement
    pub fn new() -> Self {
        Self
    }

    /// Draw `shots` outcomes from the state's probability distribution
    ///
    /// # Errors
    /// Returns error if the state has no probability mass
    pub fn sample<R: Rng + ?Sized>(
        &self,
        state: &StateVector,
        shots: usize,
        rng: &mut R,
    ) -> Result<SamplingResult> {
        let mut result = SamplingResult::new(shots);
        if shots == 0 {
            return Ok(result);
        }

        let table = AliasTable::new(&state.probabilities())?;
        for _ in 0..shots {
            result.add_outcome(table.sample(rng) as u64);
        }

        Ok(result)
    }
}

/// Alias table for O(1) sampling from a discrete distribution
///
/// Walker, A. J. (1977). "An Efficient Method for Generating Discrete Random
/// Variables with General Distributions"
#[derive(Debug)]
struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Build the table; the input is renormalised to sum to one
    fn new(probabilities: &[f64]) -> Result<Self> {
        let n = probabilities.len();
        let total: f64 = probabilities
            .iter()
            .filter(|&&p| p > PROBABILITY_FLOOR)
            .sum();
        if n == 0 || total <= 0.0 {
            return Err(StateError::InvalidDimension { dimension: n });
        }

        let mut scaled: Vec<f64> = probabilities
            .iter()
            .map(|&p| {
                if p > PROBABILITY_FLOOR {
                    p * n as f64 / total
                } else {
                    0.0
                }
            })
            .collect();

        let mut prob = vec![1.0; n];
        let mut alias: Vec<usize> = (0..n).collect();

        let (mut small, mut large): (Vec<usize>, Vec<usize>) =
            (0..n).partition(|&i| scaled[i] < 1.0);

        while let (Some(s), Some(&l)) = (small.pop(), large.last()) {
            prob[s] = scaled[s];
            alias[s] = l;

            scaled[l] = (scaled[l] + scaled[s]) - 1.0;
            if scaled[l] < 1.0 {
                large.pop();
                small.push(l);
            }
        }

        // Leftovers from rounding keep prob = 1 and alias to themselves.
        Ok(Self { prob, alias })
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let column = rng.gen_range(0..self.prob.len());
        if rng.gen::<f64>() < self.prob[column] {
            column
        } else {
            self.alias[column]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ghz_state() -> StateVector {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let mut amps = vec![Complex64::new(0.0, 0.0); 8];
        amps[0] = Complex64::new(h, 0.0);
        amps[7] = Complex64::new(h, 0.0);
        StateVector::from_amplitudes(3, amps).unwrap()
    }

    #[test]
    fn test_sample_only_supported_outcomes() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = ComputationalBasis::new()
            .sample(&ghz_state(), 4000, &mut rng)
            .unwrap();

        assert_eq!(result.total(), 4000);
        assert!(result.counts.keys().all(|&k| k == 0 || k == 7));

        let zeros = result.get_count(0) as f64 / 4000.0;
        assert!((zeros - 0.5).abs() < 0.05, "p(000) = {}", zeros);
    }

    #[test]
    fn test_sample_deterministic_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut amps = vec![Complex64::new(0.0, 0.0); 8];
        amps[5] = Complex64::new(1.0, 0.0);
        let state = StateVector::from_amplitudes(3, amps).unwrap();

        let result = ComputationalBasis::new().sample(&state, 250, &mut rng).unwrap();
        assert_eq!(result.get_count(5), 250);
        assert_eq!(result.to_bitstring_counts(3).get("101"), Some(&250));
    }

    #[test]
    fn test_zero_shots() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = ComputationalBasis::new()
            .sample(&ghz_state(), 0, &mut rng)
            .unwrap();
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_empty_distribution_rejected() {
        let state =
            StateVector::from_amplitudes(1, vec![Complex64::new(0.0, 0.0); 2]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(ComputationalBasis::new().sample(&state, 10, &mut rng).is_err());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = ComputationalBasis::new()
            .sample(&ghz_state(), 500, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = ComputationalBasis::new()
            .sample(&ghz_state(), 500, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_outcome() {
        assert_eq!(format_outcome(1, 3), "001");
        assert_eq!(format_outcome(6, 3), "110");
    }
}
