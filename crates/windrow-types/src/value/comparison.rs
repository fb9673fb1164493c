//! Total-order comparison for Value

use std::cmp::Ordering;

use crate::value::Value;

impl Value {
    /// Compare two values under a single total order
    ///
    /// Ranking and logical ordering need every pair of values to be
    /// comparable, so this deliberately strengthens the partial orders of
    /// NULL and NaN:
    /// - NULL sorts before every non-null value
    /// - NaN sorts after every ordinary double
    /// - Mixed INTEGER/DOUBLE compare numerically
    /// - Remaining mixed-type pairs compare by their debug rendering, which
    ///   is arbitrary but stable
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less, // NULL sorts first
            (_, Value::Null) => Ordering::Greater,

            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Double(a), Value::Double(b)) => compare_doubles(*a, *b),
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Varchar(a), Value::Varchar(b)) => a.cmp(b),

            // Numeric coercion for mixed integer/double
            (Value::Integer(a), Value::Double(b)) => compare_doubles(*a as f64, *b),
            (Value::Double(a), Value::Integer(b)) => compare_doubles(*a, *b as f64),

            // Other type combinations: compare as strings
            _ => format!("{:?}", self).cmp(&format!("{:?}", other)),
        }
    }
}

/// Compare doubles, placing NaN after every ordinary value
fn compare_doubles(a: f64, b: f64) -> Ordering {
    if a.is_nan() && b.is_nan() {
        Ordering::Equal
    } else if a.is_nan() {
        Ordering::Greater
    } else if b.is_nan() {
        Ordering::Less
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}
