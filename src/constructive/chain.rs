//! Successor chain used while a tour is being built.

const UNLINKED: usize = usize::MAX;

/// Index-linked chain of cities: `next[c]` is the city visited after `c`.
///
/// Cities not yet in the chain hold [`UNLINKED`]. The chain starts as the
/// single city `start` linked to itself.
#[derive(Debug, Clone)]
pub(crate) struct SuccessorChain {
    next: Vec<usize>,
}

impl SuccessorChain {
    pub(crate) fn new(n: usize, start: usize) -> Self {
        let mut next = vec![UNLINKED; n];
        next[start] = start;
        Self { next }
    }

    /// Returns `true` if `city` is already part of the chain.
    pub(crate) fn contains(&self, city: usize) -> bool {
        self.next[city] != UNLINKED
    }

    /// Makes `to` the successor of `from`.
    pub(crate) fn link(&mut self, from: usize, to: usize) {
        self.next[from] = to;
    }

    /// Follows successors from `start` for one full lap.
    ///
    /// The chain must be closed (every city linked, last pointing back).
    pub(crate) fn into_sequence(self, start: usize) -> Vec<usize> {
        let n = self.next.len();
        let mut sequence = Vec::with_capacity(n);
        let mut city = start;
        for _ in 0..n {
            sequence.push(city);
            city = self.next[city];
        }
        sequence
    }
}
