//! Offset (lag/lead) evaluation
//!
//! Shifts a sequence by a signed number of positions. Positions shifted
//! past either end take the fill value, so output length always equals
//! input length.

use windrow_types::{Sequence, Value};

/// Shift `seq` by `n` positions
///
/// `n > 0` looks ahead (lead): `out[i] = seq[i + n]`. `n < 0` looks back
/// (lag): `out[i] = seq[i + n]`. `n == 0` is the identity. Exactly `|n|`
/// positions at one end take the fill; `|n| >= len` yields an all-fill
/// output rather than an error.
pub fn offset(seq: &Sequence, n: i64, fill: &Value) -> Sequence {
    let len = seq.len();
    let mut values = Vec::with_capacity(len);

    for i in 0..len {
        let source = (i as i64).checked_add(n);
        match source {
            Some(s) if s >= 0 && (s as usize) < len => values.push(seq[s as usize].clone()),
            _ => values.push(fill.clone()),
        }
    }

    Sequence::new(values)
}
