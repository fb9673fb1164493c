//! Window discipline descriptions and generic dispatch
//!
//! The discipline set is closed and small, so it is modeled as one tagged
//! variant dispatched through a single entry point. Each discipline also
//! remains directly callable through its typed function when the caller
//! knows what it wants at compile time.

use windrow_types::{Sequence, Value};

use crate::{
    cumulative::CumulativeFunc,
    errors::{EngineError, Evaluation},
    map::{binary_map, unary_map, BinaryFunc, UnaryFunc},
    offset::offset,
    rank::{rank, RankMethod},
    rolling::{rolling, Aggregate, Alignment},
};

/// A map function of either arity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFunc {
    Unary(UnaryFunc),
    Binary(BinaryFunc),
}

/// Description of one window discipline with its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum WindowSpec {
    /// Elementwise map, position-independent
    Map { func: MapFunc },
    /// Signed shift with fill padding at the exposed end
    Offset { n: i64, fill: Value },
    /// Fixed-size sliding window, full-window-or-fill at the edges
    Rolling { size: usize, align: Alignment, agg: Aggregate, fill: Value },
    /// Running aggregate from the start through the current position
    Cumulative { func: CumulativeFunc },
    /// Whole-sequence ranking
    Complete { method: RankMethod, desc: bool },
}

impl WindowSpec {
    /// Number of input sequences this discipline consumes
    pub fn arity(&self) -> usize {
        match self {
            WindowSpec::Map { func: MapFunc::Binary(_) } => 2,
            _ => 1,
        }
    }
}

/// Evaluate one window discipline over its inputs
///
/// The single polymorphic entry point: callers that select disciplines at
/// runtime hand over a `WindowSpec` plus the matching number of sequences
/// and get back the output with its non-fatal notices. Arity mismatches
/// fail fast before any computation.
pub fn evaluate(spec: &WindowSpec, inputs: &[&Sequence]) -> Result<Evaluation, EngineError> {
    let expected = spec.arity();
    if inputs.len() != expected {
        return Err(EngineError::InvalidArity { expected, provided: inputs.len() });
    }

    match spec {
        WindowSpec::Map { func: MapFunc::Unary(f) } => Ok(unary_map(inputs[0], |v| f.apply(v))),
        WindowSpec::Map { func: MapFunc::Binary(f) } => {
            binary_map(inputs[0], inputs[1], |a, b| f.apply(a, b))
        }
        WindowSpec::Offset { n, fill } => Ok(Evaluation::clean(offset(inputs[0], *n, fill))),
        WindowSpec::Rolling { size, align, agg, fill } => {
            let values = rolling(inputs[0], *size, *align, |w| agg.apply(w), fill)?;
            Ok(Evaluation::clean(values))
        }
        WindowSpec::Cumulative { func } => Ok(Evaluation::clean(func.run(inputs[0]))),
        WindowSpec::Complete { method, desc } => {
            Ok(Evaluation::clean(rank(inputs[0], *method, *desc)))
        }
    }
}
