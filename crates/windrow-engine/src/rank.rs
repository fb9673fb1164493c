//! Complete-window ranking
//!
//! Ranks every position of a sequence under one of three tie-breaking
//! disciplines, a window function whose window is the entire sequence.

use std::cmp::Ordering;

use windrow_types::{Sequence, Value};

/// Tie-breaking discipline for ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMethod {
    /// Every member of a tie-group takes the group's first 1-based sort
    /// position; the next distinct value jumps by the group size
    /// (sports ranking: [10, 10, 20] -> [1, 1, 3])
    Min,
    /// Every member of a tie-group takes the group's 1-based ordinal among
    /// distinct values, leaving no gaps ([10, 10, 20] -> [1, 1, 2])
    Dense,
    /// Unique 1-based stable-sort position; ties break by original
    /// relative position ([10, 10, 20] -> [1, 2, 3])
    Ordinal,
}

/// Rank every position of `seq`
///
/// Stably sorts indices by value (`desc` reverses the comparison but keeps
/// stability, so ties still resolve first-seen-first-ranked), partitions
/// the sorted order into tie-groups of equal value, then assigns ranks per
/// group by `method`. NULL participates in the ordering like any value and
/// sorts first ascending. O(n log n) sort plus an O(n) assignment pass.
pub fn rank(seq: &Sequence, method: RankMethod, desc: bool) -> Sequence {
    let len = seq.len();

    let mut order: Vec<usize> = (0..len).collect();
    order.sort_by(|&a, &b| {
        let cmp = seq[a].compare(&seq[b]);
        if desc {
            cmp.reverse()
        } else {
            cmp
        }
    });

    let mut ranks = vec![0i64; len];
    let mut group_start = 0usize;
    let mut dense_rank = 0i64;

    for pos in 0..len {
        let new_group =
            pos == 0 || seq[order[pos]].compare(&seq[order[pos - 1]]) != Ordering::Equal;
        if new_group {
            group_start = pos;
            dense_rank += 1;
        }

        ranks[order[pos]] = match method {
            RankMethod::Min => (group_start + 1) as i64,
            RankMethod::Dense => dense_rank,
            RankMethod::Ordinal => (pos + 1) as i64,
        };
    }

    ranks.into_iter().map(Value::Integer).collect()
}
