use windrow_types::Value;

use super::{bools, ints};
use crate::cumulative::{cumulative, CumulativeFunc};

// ===== Generic Fold Tests =====

#[test]
fn test_fold_emits_every_intermediate_state() {
    let seq = ints(&[1, 2, 3]);

    let result = cumulative(
        &seq,
        0i64,
        |acc, v| match v {
            Value::Integer(n) => acc + n,
            _ => acc,
        },
        |acc| Value::Integer(*acc),
    );

    assert_eq!(result.values(), &[Value::Integer(1), Value::Integer(3), Value::Integer(6)]);
}

#[test]
fn test_fold_on_empty_sequence() {
    let seq = ints(&[]);

    let result = cumulative(&seq, 0i64, |acc, _| acc, |acc| Value::Integer(*acc));

    assert_eq!(result.len(), 0);
}

// ===== Running Sum Tests =====

#[test]
fn test_running_sum_matches_prefix_sums() {
    let seq = ints(&[5, -2, 7, 0, 1]);

    let result = CumulativeFunc::Sum.run(&seq);

    // out[i] == sum(seq[0..=i]) at every position
    let mut expected = 0i64;
    for (i, value) in result.iter().enumerate() {
        if let Value::Integer(n) = seq[i] {
            expected += n;
        }
        assert_eq!(*value, Value::Integer(expected));
    }
}

#[test]
fn test_running_sum_skips_nulls() {
    let seq: windrow_types::Sequence =
        vec![Value::Null, Value::Integer(2), Value::Null, Value::Integer(3)].into();

    let result = CumulativeFunc::Sum.run(&seq);

    // NULL before any value emits NULL; later NULLs hold the running total
    assert_eq!(
        result.values(),
        &[Value::Null, Value::Integer(2), Value::Integer(2), Value::Integer(5)]
    );
}

#[test]
fn test_running_sum_promotes_on_integer_overflow() {
    let seq = ints(&[i64::MAX, 1]);

    let result = CumulativeFunc::Sum.run(&seq);

    assert_eq!(result[0], Value::Integer(i64::MAX));
    assert_eq!(result[1], Value::Double(i64::MAX as f64 + 1.0));
}

// ===== Other Running Aggregates =====

#[test]
fn test_running_product() {
    let seq = ints(&[2, 3, 4]);

    let result = CumulativeFunc::Product.run(&seq);

    assert_eq!(result.values(), &[Value::Integer(2), Value::Integer(6), Value::Integer(24)]);
}

#[test]
fn test_running_product_promotes_on_integer_overflow() {
    let seq = ints(&[i64::MAX, 2]);

    let result = CumulativeFunc::Product.run(&seq);

    assert_eq!(result[0], Value::Integer(i64::MAX));
    assert_eq!(result[1], Value::Double(i64::MAX as f64 * 2.0));
}

#[test]
fn test_running_min_max() {
    let seq = ints(&[3, 5, 1, 4]);

    let min = CumulativeFunc::Min.run(&seq);
    let max = CumulativeFunc::Max.run(&seq);

    assert_eq!(
        min.values(),
        &[Value::Integer(3), Value::Integer(3), Value::Integer(1), Value::Integer(1)]
    );
    assert_eq!(
        max.values(),
        &[Value::Integer(3), Value::Integer(5), Value::Integer(5), Value::Integer(5)]
    );
}

#[test]
fn test_running_mean_carries_pair_state() {
    let seq = ints(&[2, 4, 9]);

    let result = CumulativeFunc::Mean.run(&seq);

    assert_eq!(result.values(), &[Value::Double(2.0), Value::Double(3.0), Value::Double(5.0)]);
}

#[test]
fn test_running_any_all() {
    let seq = bools(&[false, true, false]);

    let any = CumulativeFunc::Any.run(&seq);
    let all = CumulativeFunc::All.run(&seq);

    assert_eq!(
        any.values(),
        &[Value::Boolean(false), Value::Boolean(true), Value::Boolean(true)]
    );
    assert_eq!(
        all.values(),
        &[Value::Boolean(false), Value::Boolean(false), Value::Boolean(false)]
    );
}

#[test]
fn test_length_preserved_by_every_builtin() {
    let seq = ints(&[1, 2, 3, 4]);

    for func in [
        CumulativeFunc::Sum,
        CumulativeFunc::Product,
        CumulativeFunc::Min,
        CumulativeFunc::Max,
        CumulativeFunc::Mean,
    ] {
        assert_eq!(func.run(&seq).len(), seq.len());
    }
}
