//! Windrow - Vectorized Window-Function Evaluation
//!
//! This is the root crate that re-exports all components.

pub use windrow_engine as engine;
pub use windrow_types as types;
