//! Fixed-size rolling window evaluation
//!
//! Applies an aggregate over a sliding contiguous window per output
//! position. Positions whose full window falls outside the sequence take
//! the fill value, so edges degrade to fill instead of short-window
//! aggregates and output length is preserved.

use std::cmp::Ordering;

use windrow_types::{Sequence, Value};

use crate::errors::EngineError;

#[cfg(feature = "parallel")]
use crate::parallel::ParallelConfig;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Anchor point of a fixed-size window relative to its output position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Window covers `[i, i+size-1]` (leading window)
    Left,
    /// Window covers `[i-size+1, i]` (trailing window)
    Right,
    /// Window covers `[i - floor((size-1)/2), i + ceil((size-1)/2)]`
    Center,
}

/// Apply `agg` over a window of `size` positions anchored by `align`
///
/// `agg` must be order-insensitive over the window (sum, mean, min, max);
/// order-sensitive running state belongs to the cumulative evaluator.
/// Fails fast with `InvalidWindowSize` when `size == 0`.
pub fn rolling<F>(
    seq: &Sequence,
    size: usize,
    align: Alignment,
    agg: F,
    fill: &Value,
) -> Result<Sequence, EngineError>
where
    F: Fn(&[Value]) -> Value + Sync,
{
    if size == 0 {
        return Err(EngineError::InvalidWindowSize { size });
    }

    #[cfg(feature = "parallel")]
    if ParallelConfig::global().should_parallelize_rolling(seq.len()) {
        return Ok(rolling_parallel(seq, size, align, &agg, fill));
    }

    Ok(rolling_sequential(seq, size, align, &agg, fill))
}

pub(crate) fn rolling_sequential<F>(
    seq: &Sequence,
    size: usize,
    align: Alignment,
    agg: &F,
    fill: &Value,
) -> Sequence
where
    F: Fn(&[Value]) -> Value,
{
    let values = seq.values();
    let out: Vec<Value> = (0..seq.len())
        .map(|i| match window_at(values, i, size, align) {
            Some(window) => agg(window),
            None => fill.clone(),
        })
        .collect();
    Sequence::new(out)
}

/// Same computation as `rolling_sequential`, one rayon task per position
#[cfg(feature = "parallel")]
pub(crate) fn rolling_parallel<F>(
    seq: &Sequence,
    size: usize,
    align: Alignment,
    agg: &F,
    fill: &Value,
) -> Sequence
where
    F: Fn(&[Value]) -> Value + Sync,
{
    let values = seq.values();
    let out: Vec<Value> = (0..seq.len())
        .into_par_iter()
        .map(|i| match window_at(values, i, size, align) {
            Some(window) => agg(window),
            None => fill.clone(),
        })
        .collect();
    Sequence::new(out)
}

/// Slice of the full window anchored at output position `i`, if it fits
fn window_at(values: &[Value], i: usize, size: usize, align: Alignment) -> Option<&[Value]> {
    let start = match align {
        Alignment::Left => i,
        Alignment::Right => i.checked_sub(size - 1)?,
        Alignment::Center => i.checked_sub((size - 1) / 2)?,
    };
    let end = start.checked_add(size)?;

    if end <= values.len() {
        Some(&values[start..end])
    } else {
        None
    }
}

/// Built-in order-insensitive window aggregates
///
/// NULL elements are skipped; a window holding only NULLs aggregates to
/// NULL (COUNT yields 0). SUM preserves INTEGER while every contributing
/// value is an integer and the running total stays in i64 range, promoting
/// to DOUBLE otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Sum,
    Mean,
    Min,
    Max,
    Count,
}

impl Aggregate {
    /// Apply the aggregate over one window
    pub fn apply(&self, window: &[Value]) -> Value {
        match self {
            Aggregate::Sum => sum_window(window),
            Aggregate::Mean => mean_window(window),
            Aggregate::Min => extremum_window(window, Ordering::Less),
            Aggregate::Max => extremum_window(window, Ordering::Greater),
            Aggregate::Count => {
                let count = window.iter().filter(|v| !v.is_null()).count();
                Value::Integer(count as i64)
            }
        }
    }
}

fn sum_window(window: &[Value]) -> Value {
    let mut int_sum = 0i64;
    let mut double_sum = 0.0f64;
    let mut all_integer = true;
    let mut has_value = false;

    for value in window {
        match value {
            Value::Integer(n) => {
                match int_sum.checked_add(*n) {
                    Some(sum) => int_sum = sum,
                    None => all_integer = false,
                }
                double_sum += *n as f64;
                has_value = true;
            }
            Value::Double(x) => {
                double_sum += x;
                all_integer = false;
                has_value = true;
            }
            _ => {} // Ignore NULL and non-numeric values
        }
    }

    if !has_value {
        Value::Null
    } else if all_integer {
        Value::Integer(int_sum)
    } else {
        Value::Double(double_sum)
    }
}

fn mean_window(window: &[Value]) -> Value {
    let mut sum = 0.0f64;
    let mut count = 0i64;

    for value in window {
        if let Some(x) = value.as_double() {
            sum += x;
            count += 1;
        }
    }

    if count > 0 {
        Value::Double(sum / count as f64)
    } else {
        Value::Null
    }
}

fn extremum_window(window: &[Value], keep: Ordering) -> Value {
    let mut best: Option<&Value> = None;

    for value in window {
        if value.is_null() {
            continue;
        }
        match best {
            Some(current) if value.compare(current) != keep => {}
            _ => best = Some(value),
        }
    }

    best.cloned().unwrap_or(Value::Null)
}
