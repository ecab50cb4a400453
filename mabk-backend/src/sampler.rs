//! The sampling capability every backend provides

use crate::{BackendError, OutcomeCounts, Result};
use mabk_core::Circuit;

/// Shot-based circuit execution
///
/// Implementations take a batch of circuits and a positive shot budget and
/// return one [`OutcomeCounts`] per circuit, in submission order, each
/// summing to `shots`. Results are stochastic: repeated calls may differ
/// unless the implementation is seeded.
///
/// # Example
///
/// ```
/// use mabk_backend::{OutcomeCounts, Result, Sampler};
/// use mabk_core::Circuit;
///
/// /// Always reports the all-zeros outcome
/// struct ZeroSampler;
///
/// impl Sampler for ZeroSampler {
///     fn name(&self) -> &str {
///         "zeros"
///     }
///
///     fn run(&self, circuits: &[Circuit], shots: usize) -> Result<Vec<OutcomeCounts>> {
///         circuits
///             .iter()
///             .map(|c| OutcomeCounts::from_counts([("0".repeat(c.num_qubits()), shots)], shots))
///             .collect()
///     }
/// }
///
/// let counts = ZeroSampler.run_one(&Circuit::new(3), 10).unwrap();
/// assert_eq!(counts.get("000"), 10);
/// ```
pub trait Sampler {
    /// Backend name for logs and reports
    fn name(&self) -> &str;

    /// Execute every circuit with `shots` shots
    fn run(&self, circuits: &[Circuit], shots: usize) -> Result<Vec<OutcomeCounts>>;

    /// Execute a single circuit
    fn run_one(&self, circuit: &Circuit, shots: usize) -> Result<OutcomeCounts> {
        let mut results = self.run(std::slice::from_ref(circuit), shots)?;
        match results.len() {
            1 => Ok(results.remove(0)),
            actual => Err(BackendError::BatchSizeMismatch {
                expected: 1,
                actual,
            }),
        }
    }
}

impl<S: Sampler + ?Sized> Sampler for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(&self, circuits: &[Circuit], shots: usize) -> Result<Vec<OutcomeCounts>> {
        (**self).run(circuits, shots)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(&self, circuits: &[Circuit], shots: usize) -> Result<Vec<OutcomeCounts>> {
        (**self).run(circuits, shots)
    }
}

/// Check a sampler's output against the batch it was given
///
/// Callers that depend on positional correspondence use this to catch a
/// backend that drops or reorders results.
pub fn check_batch(results: &[OutcomeCounts], circuits: usize, shots: usize) -> Result<()> {
    if results.len() != circuits {
        return Err(BackendError::BatchSizeMismatch {
            expected: circuits,
            actual: results.len(),
        });
    }
    for counts in results {
        if counts.shots() != shots {
            return Err(BackendError::ResultCountMismatch {
                expected: shots,
                actual: counts.shots(),
            });
        }
    }
    Ok(())
}
