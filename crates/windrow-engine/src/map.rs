//! Elementwise map evaluation
//!
//! Applies position-independent functions to one or two sequences. Binary
//! maps recycle their operands first. A per-element failure fills that
//! output position with NULL and records a domain notice; the rest of the
//! computation proceeds, so one bad value cannot poison the whole sequence.

use windrow_types::{Sequence, Value};

use crate::{
    errors::{EngineError, Evaluation, Notice},
    recycle::recycle,
};

/// Apply a unary function at every position
///
/// `out[i] = func(seq[i])`; output length equals input length. A `func`
/// error at position `i` becomes a NULL output plus `Notice::Domain`.
pub fn unary_map<F>(seq: &Sequence, func: F) -> Evaluation
where
    F: Fn(&Value) -> Result<Value, String>,
{
    let mut values = Vec::with_capacity(seq.len());
    let mut notices = Vec::new();

    for (index, value) in seq.iter().enumerate() {
        match func(value) {
            Ok(out) => values.push(out),
            Err(message) => {
                values.push(Value::Null);
                notices.push(Notice::Domain { index, message });
            }
        }
    }

    Evaluation { values: Sequence::new(values), notices }
}

/// Apply a binary function at every position of the recycled operands
///
/// `out[i] = func(left[i mod len(left)], right[i mod len(right)])` over the
/// logical length `max(len(left), len(right))`. Recycle and domain notices
/// are collected in one list.
pub fn binary_map<F>(
    left: &Sequence,
    right: &Sequence,
    func: F,
) -> Result<Evaluation, EngineError>
where
    F: Fn(&Value, &Value) -> Result<Value, String>,
{
    let (plan, recycle_notice) = recycle(left.len(), right.len())?;

    let mut values = Vec::with_capacity(plan.len());
    let mut notices: Vec<Notice> = recycle_notice.into_iter().collect();

    for index in 0..plan.len() {
        let a = &left[plan.left_index(index)];
        let b = &right[plan.right_index(index)];

        match func(a, b) {
            Ok(out) => values.push(out),
            Err(message) => {
                values.push(Value::Null);
                notices.push(Notice::Domain { index, message });
            }
        }
    }

    Ok(Evaluation { values: Sequence::new(values), notices })
}

/// Built-in unary map functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunc {
    Abs,
    Neg,
    Sqrt,
    Ln,
    Exp,
    Not,
}

impl UnaryFunc {
    /// Apply this function to one value
    ///
    /// NULL propagates to NULL without raising a condition. Values outside
    /// the function's domain (SQRT or LN of a negative, integer overflow,
    /// non-numeric input) are reported as errors for the map evaluator to
    /// fill.
    pub fn apply(&self, value: &Value) -> Result<Value, String> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        match self {
            UnaryFunc::Abs => match value {
                Value::Integer(n) => n
                    .checked_abs()
                    .map(Value::Integer)
                    .ok_or_else(|| format!("integer overflow in ABS({})", n)),
                Value::Double(x) => Ok(Value::Double(x.abs())),
                other => Err(format!("ABS is undefined for {}", other.type_name())),
            },
            UnaryFunc::Neg => match value {
                Value::Integer(n) => n
                    .checked_neg()
                    .map(Value::Integer)
                    .ok_or_else(|| format!("integer overflow in -({})", n)),
                Value::Double(x) => Ok(Value::Double(-x)),
                other => Err(format!("negation is undefined for {}", other.type_name())),
            },
            UnaryFunc::Sqrt => {
                let x = numeric_operand("SQRT", value)?;
                if x < 0.0 {
                    Err(format!("SQRT is undefined for negative value {}", value))
                } else {
                    Ok(Value::Double(x.sqrt()))
                }
            }
            UnaryFunc::Ln => {
                let x = numeric_operand("LN", value)?;
                if x <= 0.0 {
                    Err(format!("LN is undefined for non-positive value {}", value))
                } else {
                    Ok(Value::Double(x.ln()))
                }
            }
            UnaryFunc::Exp => {
                let x = numeric_operand("EXP", value)?;
                Ok(Value::Double(x.exp()))
            }
            UnaryFunc::Not => match value {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Err(format!("NOT is undefined for {}", other.type_name())),
            },
        }
    }
}

/// Built-in binary map functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFunc {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryFunc {
    /// Apply this function to a pair of values
    ///
    /// A NULL on either side propagates to NULL. Arithmetic preserves
    /// INTEGER when both operands are integers (except DIV, which always
    /// yields DOUBLE); mixed numeric operands promote to DOUBLE.
    pub fn apply(&self, left: &Value, right: &Value) -> Result<Value, String> {
        if left.is_null() || right.is_null() {
            return Ok(Value::Null);
        }

        match self {
            BinaryFunc::Add => arithmetic(left, right, "+", i64::checked_add, |a, b| a + b),
            BinaryFunc::Sub => arithmetic(left, right, "-", i64::checked_sub, |a, b| a - b),
            BinaryFunc::Mul => arithmetic(left, right, "*", i64::checked_mul, |a, b| a * b),
            BinaryFunc::Div => {
                let a = numeric_operand("/", left)?;
                let b = numeric_operand("/", right)?;
                if b == 0.0 {
                    Err("division by zero".to_string())
                } else {
                    Ok(Value::Double(a / b))
                }
            }
            BinaryFunc::Mod => match (left, right) {
                (Value::Integer(_), Value::Integer(0)) => Err("modulo by zero".to_string()),
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.rem_euclid(*b))),
                _ => {
                    let a = numeric_operand("%", left)?;
                    let b = numeric_operand("%", right)?;
                    if b == 0.0 {
                        Err("modulo by zero".to_string())
                    } else {
                        Ok(Value::Double(a.rem_euclid(b)))
                    }
                }
            },
            BinaryFunc::And => boolean_pair("AND", left, right).map(|(a, b)| Value::Boolean(a && b)),
            BinaryFunc::Or => boolean_pair("OR", left, right).map(|(a, b)| Value::Boolean(a || b)),
            BinaryFunc::Eq => comparison(left, right, |ord| ord == std::cmp::Ordering::Equal),
            BinaryFunc::Lt => comparison(left, right, |ord| ord == std::cmp::Ordering::Less),
            BinaryFunc::Le => comparison(left, right, |ord| ord != std::cmp::Ordering::Greater),
            BinaryFunc::Gt => comparison(left, right, |ord| ord == std::cmp::Ordering::Greater),
            BinaryFunc::Ge => comparison(left, right, |ord| ord != std::cmp::Ordering::Less),
        }
    }
}

/// Coerce a value to f64 or report a type failure for `op`
fn numeric_operand(op: &str, value: &Value) -> Result<f64, String> {
    value
        .as_double()
        .ok_or_else(|| format!("{} is undefined for {}", op, value.type_name()))
}

/// Integer-preserving arithmetic with DOUBLE promotion for mixed operands
fn arithmetic(
    left: &Value,
    right: &Value,
    op: &str,
    int_op: fn(i64, i64) -> Option<i64>,
    double_op: fn(f64, f64) -> f64,
) -> Result<Value, String> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => int_op(*a, *b)
            .map(Value::Integer)
            .ok_or_else(|| format!("integer overflow in {} {} {}", a, op, b)),
        _ => {
            let a = numeric_operand(op, left)?;
            let b = numeric_operand(op, right)?;
            Ok(Value::Double(double_op(a, b)))
        }
    }
}

fn boolean_pair(op: &str, left: &Value, right: &Value) -> Result<(bool, bool), String> {
    match (left.as_boolean(), right.as_boolean()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(format!(
            "{} is undefined for {} and {}",
            op,
            left.type_name(),
            right.type_name()
        )),
    }
}

fn comparison<F>(left: &Value, right: &Value, accept: F) -> Result<Value, String>
where
    F: Fn(std::cmp::Ordering) -> bool,
{
    Ok(Value::Boolean(accept(left.compare(right))))
}
