//! Outcome-count maps returned by samplers

use crate::{BackendError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Measurement counts for one circuit: bit string -> count
///
/// Bit strings put qubit 0 in the rightmost position. Only observed
/// outcomes are stored; anything absent has count zero. The counts always
/// sum to [`shots`](OutcomeCounts::shots). Deserialization goes through
/// [`OutcomeCounts::from_counts`] and enforces the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOutcomeCounts")]
pub struct OutcomeCounts {
    counts: BTreeMap<String, usize>,
    shots: usize,
}

/// Unchecked wire form of [`OutcomeCounts`]
#[derive(Deserialize)]
struct RawOutcomeCounts {
    counts: BTreeMap<String, usize>,
    shots: usize,
}

impl TryFrom<RawOutcomeCounts> for OutcomeCounts {
    type Error = BackendError;

    fn try_from(raw: RawOutcomeCounts) -> Result<Self> {
        Self::from_counts(raw.counts, raw.shots)
    }
}

impl OutcomeCounts {
    /// Build a count map, checking that it adds up to `shots`
    ///
    /// Zero-count entries are dropped. Every key must consist of `0`/`1`
    /// characters and all keys must share one width.
    ///
    /// # Errors
    /// Returns [`BackendError::ResultCountMismatch`] if the counts don't sum
    /// to `shots` and [`BackendError::MalformedOutcome`] for a bad key.
    ///
    /// # Example
    /// ```
    /// use mabk_backend::OutcomeCounts;
    ///
    /// let counts = OutcomeCounts::from_counts([("000", 3), ("111", 1)], 4).unwrap();
    /// assert_eq!(counts.get("000"), 3);
    /// assert_eq!(counts.get("010"), 0);
    ///
    /// assert!(OutcomeCounts::from_counts([("000", 3)], 4).is_err());
    /// ```
    pub fn from_counts<K, I>(counts: I, shots: usize) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, usize)>,
    {
        let mut map = BTreeMap::new();
        let mut width = None;

        for (key, count) in counts {
            let key = key.into();
            if key.is_empty() || !key.chars().all(|c| c == '0' || c == '1') {
                return Err(BackendError::MalformedOutcome(key));
            }
            match width {
                None => width = Some(key.len()),
                Some(w) if w != key.len() => return Err(BackendError::MalformedOutcome(key)),
                Some(_) => {}
            }
            if count > 0 {
                *map.entry(key).or_insert(0) += count;
            }
        }

        let total: usize = map.values().sum();
        if total != shots {
            return Err(BackendError::ResultCountMismatch {
                expected: shots,
                actual: total,
            });
        }

        Ok(Self { counts: map, shots })
    }

    /// Total number of shots
    #[inline]
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Count for one outcome, zero if never observed
    pub fn get(&self, outcome: &str) -> usize {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct observed outcomes
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcome was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(outcome, count)` in lexicographic outcome order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Observed outcomes
    pub fn outcomes(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
