//! Logical-order views over physically ordered sequences
//!
//! An `OrderContext` computes a permutation from an ordering key once, then
//! lets callers reorder any same-length sequence into key order, run any
//! evaluator on the reordered view, and restore the result to physical
//! order. No evaluator needs to know whether it is operating in logical or
//! physical order; all other columns stay untouched.

use windrow_types::Sequence;

use crate::errors::EngineError;

/// A reusable reorder/restore permutation derived from an ordering key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderContext {
    /// forward[p] = physical index of the value at logical position p
    forward: Vec<usize>,
    /// inverse[i] = logical position of physical index i
    inverse: Vec<usize>,
}

impl OrderContext {
    /// Build the context from an ordering key
    ///
    /// The permutation sorts ascending by key, stable on ties so equal keys
    /// keep their original relative order. Applying `forward` then
    /// `inverse` is the identity.
    pub fn with_order(key: &Sequence) -> Self {
        let mut forward: Vec<usize> = (0..key.len()).collect();
        forward.sort_by(|&a, &b| key[a].compare(&key[b]));

        let mut inverse = vec![0usize; forward.len()];
        for (position, &index) in forward.iter().enumerate() {
            inverse[index] = position;
        }

        Self { forward, inverse }
    }

    /// Number of positions the permutation covers
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// View `seq` in key order: `out[p] = seq[forward[p]]`
    pub fn reorder(&self, seq: &Sequence) -> Result<Sequence, EngineError> {
        self.check_len(seq)?;
        Ok(self.forward.iter().map(|&i| seq[i].clone()).collect())
    }

    /// Undo `reorder`, returning `seq` to physical order
    pub fn restore(&self, seq: &Sequence) -> Result<Sequence, EngineError> {
        self.check_len(seq)?;
        Ok(self.inverse.iter().map(|&p| seq[p].clone()).collect())
    }

    fn check_len(&self, seq: &Sequence) -> Result<(), EngineError> {
        if seq.len() == self.forward.len() {
            Ok(())
        } else {
            Err(EngineError::LengthMismatch { left: self.forward.len(), right: seq.len() })
        }
    }
}
