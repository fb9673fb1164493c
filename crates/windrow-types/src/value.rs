//! Runtime value representation

mod comparison;
mod display;

/// Values carried by a sequence, including NULL
///
/// NULL is the designated missing marker and the default fill for padded
/// output positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Varchar(String),
    Null,
}

impl Value {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name as a string (for condition messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Double(_) => "DOUBLE",
            Value::Boolean(_) => "BOOLEAN",
            Value::Varchar(_) => "VARCHAR",
            Value::Null => "NULL",
        }
    }

    /// Numeric view of this value, coercing INTEGER to DOUBLE
    ///
    /// Returns `None` for non-numeric values (including NULL).
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Double(x) => Some(*x),
            _ => None,
        }
    }

    /// Boolean view of this value
    ///
    /// Returns `None` for non-boolean values (including NULL).
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}
