//! Unit tests for the evaluation engine, one file per component

use windrow_types::{Sequence, Value};

mod cumulative;

/// Build a sequence of INTEGER values
pub fn ints(values: &[i64]) -> Sequence {
    values.iter().map(|&v| Value::Integer(v)).collect()
}

/// Build a sequence of DOUBLE values
pub fn doubles(values: &[f64]) -> Sequence {
    values.iter().map(|&v| Value::Double(v)).collect()
}

/// Build a sequence of BOOLEAN values
pub fn bools(values: &[bool]) -> Sequence {
    values.iter().map(|&v| Value::Boolean(v)).collect()
}
