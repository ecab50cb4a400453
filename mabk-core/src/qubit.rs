//! Qubit addressing

use std::fmt;

/// Type-safe identifier for a qubit slot in a circuit
///
/// # Example
/// ```
/// use mabk_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q2 = QubitId::new(2);
/// assert!(q0 < q2);
/// assert_eq!(q2.index(), 2);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(QubitId::new(2).to_string(), "q2");
    }

    #[test]
    fn test_qubit_conversions() {
        let q: QubitId = 1.into();
        assert_eq!(q.index(), 1);
        let i: usize = q.into();
        assert_eq!(i, 1);
    }
}
