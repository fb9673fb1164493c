//! Vectorized Window-Function Evaluation Engine
//!
//! Computes derived sequences from ordered input sequences under five
//! window disciplines, each preserving the input's logical length:
//! - `map` - elementwise, position-independent (with operand recycling)
//! - `offset` - signed lag/lead shift with fill padding
//! - `rolling` - fixed-size sliding window with alignment
//! - `cumulative` - running aggregate from the start through each position
//! - `rank` - whole-sequence ranking under three tie disciplines
//!
//! An `OrderContext` lets any evaluator run under a logical order distinct
//! from physical position: reorder the input, evaluate, restore. All
//! evaluators are pure functions of their inputs; non-fatal per-element
//! conditions travel back through the `Notice` side channel instead of
//! aborting the call.

pub mod cumulative;
pub mod errors;
pub mod map;
pub mod offset;
pub mod order;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod rank;
pub mod recycle;
pub mod rolling;
pub mod spec;

pub use cumulative::{cumulative, CumulativeFunc};
pub use errors::{EngineError, Evaluation, Notice};
pub use map::{binary_map, unary_map, BinaryFunc, UnaryFunc};
pub use offset::offset;
pub use order::OrderContext;
pub use rank::{rank, RankMethod};
pub use recycle::{recycle, Recycled};
pub use rolling::{rolling, Aggregate, Alignment};
pub use spec::{evaluate, MapFunc, WindowSpec};

#[cfg(test)]
mod tests;
