//! Property-based tests for the expectation aggregator

use mabk_backend::OutcomeCounts;
use mabk_witness::expectation::{expectation, parity_sign, probability, witness};
use mabk_witness::SingleCircuitWitness;
use proptest::prelude::*;

fn build_counts(per_outcome: &[usize]) -> (OutcomeCounts, usize) {
    let shots: usize = per_outcome.iter().sum();
    let counts = OutcomeCounts::from_counts(
        per_outcome
            .iter()
            .enumerate()
            .map(|(i, &c)| (format!("{:03b}", i), c)),
        shots,
    )
    .unwrap();
    (counts, shots)
}

proptest! {
    /// Property: parity expectation stays in [-1, 1]
    #[test]
    fn expectation_in_range(per_outcome in prop::collection::vec(0usize..500, 8)) {
        let (counts, shots) = build_counts(&per_outcome);
        prop_assume!(shots > 0);

        let e = expectation(&counts, shots).unwrap();
        prop_assert!((-1.0..=1.0).contains(&e), "expectation {} out of range", e);
    }

    /// Property: E = P(even) - P(odd)
    #[test]
    fn expectation_is_parity_difference(per_outcome in prop::collection::vec(0usize..500, 8)) {
        let (counts, shots) = build_counts(&per_outcome);
        prop_assume!(shots > 0);

        let even: f64 = counts
            .outcomes()
            .filter(|o| parity_sign(o) > 0.0)
            .map(|o| probability(&counts, o, shots).unwrap())
            .sum();
        let e = expectation(&counts, shots).unwrap();
        prop_assert!((e - (2.0 * even - 1.0)).abs() < 1e-12);
    }

    /// Property: probabilities of all outcomes sum to one
    #[test]
    fn probabilities_sum_to_one(per_outcome in prop::collection::vec(0usize..500, 8)) {
        let (counts, shots) = build_counts(&per_outcome);
        prop_assume!(shots > 0);

        let total: f64 = (0..8)
            .map(|i| probability(&counts, &format!("{:03b}", i), shots).unwrap())
            .sum();
        prop_assert!((total - 1.0).abs() < 1e-12);
    }

    /// Property: the single-circuit value is bounded by 1 in absolute value
    #[test]
    fn single_circuit_value_bounded(per_outcome in prop::collection::vec(0usize..500, 8)) {
        let (counts, shots) = build_counts(&per_outcome);
        prop_assume!(shots > 0);

        let (value, terms) = SingleCircuitWitness::value_of(&counts, shots).unwrap();
        prop_assert!(value.abs() <= 1.0 + 1e-12);
        prop_assert_eq!(terms.len(), 8);
    }

    /// Property: a four-term witness of valid expectations never exceeds 4
    #[test]
    fn witness_bounded_by_coefficient_norm(
        expectations in prop::collection::vec(-1.0f64..=1.0, 4),
    ) {
        let w = witness(&expectations, &[1.0, -1.0, -1.0, -1.0]).unwrap();
        prop_assert!(w.abs() <= 4.0 + 1e-12);
    }
}
