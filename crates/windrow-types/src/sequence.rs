//! Immutable ordered sequences of values

use std::ops::Index;

use crate::value::Value;

/// An immutable, index-addressable ordered collection of values
///
/// Physical position `0..len-1` is the default order. Evaluators borrow a
/// sequence read-only and return a newly owned sequence of the same logical
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    values: Vec<Value>,
}

impl Sequence {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Sequence of length `len` holding only the given value
    pub fn repeated(value: Value, len: usize) -> Self {
        Self { values: vec![value; len] }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Borrow the backing slice
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consume the sequence, yielding its backing vector
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}
