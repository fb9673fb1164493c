//! Value and Sequence Representation
//!
//! This crate provides the runtime data model shared by every window
//! evaluator:
//! - `Value`: the closed set of element types (numeric, boolean, text, NULL)
//! - `Sequence`: an immutable, index-addressable ordered collection of values

mod sequence;
mod value;

pub use sequence::Sequence;
pub use value::Value;
