//! Error and condition types for the evaluation engine

use std::fmt;

use windrow_types::Sequence;

/// Fatal evaluation errors
///
/// Parameter-validation failures abort the call before any output is
/// produced. Per-element failures are not errors; they travel through the
/// `Notice` side channel alongside a complete output sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Operand lengths cannot be reconciled by recycling
    LengthMismatch { left: usize, right: usize },
    /// Rolling window size must be at least 1
    InvalidWindowSize { size: usize },
    /// Wrong number of input sequences for the requested discipline
    InvalidArity { expected: usize, provided: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::LengthMismatch { left, right } => {
                write!(f, "Operand lengths {} and {} are incompatible", left, right)
            }
            EngineError::InvalidWindowSize { size } => {
                write!(f, "Window size must be positive, got {}", size)
            }
            EngineError::InvalidArity { expected, provided } => {
                write!(f, "Expected {} input sequence(s), got {}", expected, provided)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Non-fatal conditions recorded while a call proceeds
///
/// The call still returns a full-length output; notices tell the caller
/// which positions or operands to inspect. Treating a notice as fatal is
/// the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Recycling accepted operands whose lengths are not exact multiples;
    /// the final cycle of the shorter operand was truncated
    PartialRecycle { shorter: usize, longer: usize },
    /// The applied function was undefined for the value at `index`;
    /// that output position holds the fill value instead
    Domain { index: usize, message: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PartialRecycle { shorter, longer } => {
                write!(
                    f,
                    "Shorter operand (length {}) is not an exact divisor of length {}",
                    shorter, longer
                )
            }
            Notice::Domain { index, message } => {
                write!(f, "Value at position {} was filled: {}", index, message)
            }
        }
    }
}

/// An output sequence plus the non-fatal conditions raised computing it
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub values: Sequence,
    pub notices: Vec<Notice>,
}

impl Evaluation {
    /// Wrap an output that raised no conditions
    pub fn clean(values: Sequence) -> Self {
        Self { values, notices: Vec::new() }
    }
}
