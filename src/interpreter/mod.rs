//! Tree-walking interpreter.
//!
//! Evaluates a program that passed the type checker:
//!
//! - Runtime values: integers, floats, strings, booleans, float vectors and
//!   matrices, and lists of mixed values
//! - A memory stack with one frame per loop iteration
//! - Scalar, elementwise and matrix arithmetic with runtime shape checks
//! - Slicing and slice assignment with runtime bounds checks
//! - `break`/`continue`/`return` as signals returned from each statement
//!
//! The first runtime error stops evaluation.

pub mod expr;
pub mod interpreter;
pub mod memory;
pub mod operations;
pub mod slice;
pub mod stmt;
pub mod value;

#[cfg(test)]
mod tests;
