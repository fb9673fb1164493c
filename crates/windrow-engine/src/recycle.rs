//! Operand recycling for elementwise binary operations
//!
//! Aligns two operands of possibly different lengths by repeating the
//! shorter one. The alignment is a lazy `i -> i mod len` index mapping; no
//! repeated copies are materialized.

use crate::errors::{EngineError, Notice};

/// Lazy index mapping between two recycled operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recycled {
    len: usize,
    left_len: usize,
    right_len: usize,
}

impl Recycled {
    /// Logical length of the recycled pair
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index into the left operand for logical position `i`
    pub fn left_index(&self, i: usize) -> usize {
        i % self.left_len
    }

    /// Index into the right operand for logical position `i`
    pub fn right_index(&self, i: usize) -> usize {
        i % self.right_len
    }
}

/// Compute the recycling plan for operand lengths `left` and `right`
///
/// The logical length is `max(left, right)`. Compatible silently: equal
/// lengths, either operand of length 1, or one length an exact multiple of
/// the other. A partial cycle (neither equal, scalar, nor exact multiple)
/// is accepted but flagged with `Notice::PartialRecycle`, since the final
/// repetition of the shorter operand is silently truncated.
///
/// Recycling an empty operand against a non-empty one is the one
/// irreconcilable case: no amount of repetition produces a value, so it
/// fails with `LengthMismatch`. Two empty operands yield logical length 0.
pub fn recycle(left: usize, right: usize) -> Result<(Recycled, Option<Notice>), EngineError> {
    if (left == 0) != (right == 0) {
        return Err(EngineError::LengthMismatch { left, right });
    }

    let len = left.max(right);
    let shorter = left.min(right);

    let whole_cycles = len == 0 || len % shorter == 0;
    let notice =
        if whole_cycles { None } else { Some(Notice::PartialRecycle { shorter, longer: len }) };

    // Operand lengths of a zero-length plan are never dereferenced; keep the
    // modulus non-zero so the index maps stay total.
    let plan = Recycled { len, left_len: left.max(1), right_len: right.max(1) };

    Ok((plan, notice))
}
