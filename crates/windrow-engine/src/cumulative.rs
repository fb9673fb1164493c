//! Cumulative (running) window evaluation
//!
//! A strict left-to-right fold that emits every intermediate state. Every
//! position has at least one preceding element (itself), so no padding is
//! ever needed and output length is preserved by construction.

use windrow_types::{Sequence, Value};

/// Fold `seq` from the left, emitting one output per position
///
/// `state := step(state, seq[i]); out[i] = emit(&state)`. The state type is
/// caller-chosen, so compound running state (e.g. the sum/count pair behind
/// a running mean) fits the same fold as a scalar accumulator.
pub fn cumulative<S, F, G>(seq: &Sequence, init: S, step: F, emit: G) -> Sequence
where
    F: Fn(S, &Value) -> S,
    G: Fn(&S) -> Value,
{
    let mut state = init;
    let mut values = Vec::with_capacity(seq.len());

    for value in seq.iter() {
        state = step(state, value);
        values.push(emit(&state));
    }

    Sequence::new(values)
}

/// Built-in running aggregates
///
/// NULL inputs leave the running state unchanged; positions before the
/// first non-null input emit NULL. SUM and PRODUCT preserve INTEGER while
/// every contributing value is an integer and the running total stays in
/// i64 range, promoting to DOUBLE otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CumulativeFunc {
    Sum,
    Product,
    Min,
    Max,
    Mean,
    Any,
    All,
}

impl CumulativeFunc {
    /// Evaluate this running aggregate over `seq`
    pub fn run(&self, seq: &Sequence) -> Sequence {
        match self {
            CumulativeFunc::Sum => running_arithmetic(seq, add_values),
            CumulativeFunc::Product => running_arithmetic(seq, mul_values),
            CumulativeFunc::Min => running_extremum(seq, std::cmp::Ordering::Less),
            CumulativeFunc::Max => running_extremum(seq, std::cmp::Ordering::Greater),
            CumulativeFunc::Mean => running_mean(seq),
            CumulativeFunc::Any => running_boolean(seq, |a, b| a || b),
            CumulativeFunc::All => running_boolean(seq, |a, b| a && b),
        }
    }
}

/// Running sum or product over numeric values
fn running_arithmetic(seq: &Sequence, combine: fn(&Value, &Value) -> Value) -> Sequence {
    cumulative(
        seq,
        None::<Value>,
        |state, value| {
            if !matches!(value, Value::Integer(_) | Value::Double(_)) {
                return state;
            }
            match state {
                None => Some(value.clone()),
                Some(acc) => Some(combine(&acc, value)),
            }
        },
        |state| state.clone().unwrap_or(Value::Null),
    )
}

fn add_values(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => match x.checked_add(*y) {
            Some(sum) => Value::Integer(sum),
            None => Value::Double(*x as f64 + *y as f64),
        },
        _ => Value::Double(a.as_double().unwrap_or(0.0) + b.as_double().unwrap_or(0.0)),
    }
}

fn mul_values(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => match x.checked_mul(*y) {
            Some(product) => Value::Integer(product),
            None => Value::Double(*x as f64 * *y as f64),
        },
        _ => Value::Double(a.as_double().unwrap_or(0.0) * b.as_double().unwrap_or(0.0)),
    }
}

/// Running minimum or maximum under the total value order
fn running_extremum(seq: &Sequence, keep: std::cmp::Ordering) -> Sequence {
    cumulative(
        seq,
        None::<Value>,
        |state, value| {
            if value.is_null() {
                return state;
            }
            match state {
                None => Some(value.clone()),
                Some(best) => {
                    if value.compare(&best) == keep {
                        Some(value.clone())
                    } else {
                        Some(best)
                    }
                }
            }
        },
        |state| state.clone().unwrap_or(Value::Null),
    )
}

/// Running mean, carrying a sum/count pair as the fold state
fn running_mean(seq: &Sequence) -> Sequence {
    cumulative(
        seq,
        (0.0f64, 0i64),
        |(sum, count), value| match value.as_double() {
            Some(x) => (sum + x, count + 1),
            None => (sum, count),
        },
        |(sum, count)| {
            if *count > 0 {
                Value::Double(sum / *count as f64)
            } else {
                Value::Null
            }
        },
    )
}

/// Running ANY/ALL over boolean values
fn running_boolean(seq: &Sequence, combine: fn(bool, bool) -> bool) -> Sequence {
    cumulative(
        seq,
        None::<bool>,
        |state, value| match value.as_boolean() {
            Some(b) => Some(match state {
                None => b,
                Some(acc) => combine(acc, b),
            }),
            None => state,
        },
        |state| state.map(Value::Boolean).unwrap_or(Value::Null),
    )
}
