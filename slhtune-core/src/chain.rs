//! Per-class candidate chains.

use crate::candidate::{Candidate, WinternitzClass};
use crate::error::{Error, Result};

/// Three owned candidate sequences, one per [`WinternitzClass`].
///
/// Order within a chain is insertion order until a chain is sorted.
#[derive(Debug, Default)]
pub struct ClassChains {
    chains: [Vec<Candidate>; 3],
}

impl ClassChains {
    /// Create three empty chains.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate to the chain of its class.
    ///
    /// Fails with [`Error::ResourceExhausted`] if the chain cannot grow; the
    /// candidate is dropped in that case.
    pub fn push(&mut self, candidate: Candidate) -> Result<()> {
        let admitted = self.len();
        let chain = &mut self.chains[candidate.class().index()];
        chain
            .try_reserve(1)
            .map_err(|_| Error::ResourceExhausted { admitted })?;
        chain.push(candidate);
        Ok(())
    }

    /// Candidates of one class, in current order.
    #[must_use]
    pub fn get(&self, class: WinternitzClass) -> &[Candidate] {
        &self.chains[class.index()]
    }

    /// Total number of candidates across all classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.iter().map(Vec::len).sum()
    }

    /// True if no class holds a candidate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.iter().all(Vec::is_empty)
    }

    /// Replace every chain with `f(chain)`, e.g. to sort them.
    #[must_use]
    pub fn map(self, f: impl FnMut(Vec<Candidate>) -> Vec<Candidate>) -> Self {
        Self {
            chains: self.chains.map(f),
        }
    }

    /// Give up ownership of the chains, indexed by [`WinternitzClass::index`].
    #[must_use]
    pub fn into_inner(self) -> [Vec<Candidate>; 3] {
        self.chains
    }
}
