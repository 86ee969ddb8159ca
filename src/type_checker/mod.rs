//! Type checking and semantic analysis module.
//!
//! This module performs type checking on the AST before it is evaluated:
//!
//! - Inferring a type, and for vectors and matrices a shape, for every node
//! - Validating operators against the operand types they are applied to
//! - Checking matrix multiplication and elementwise shapes
//! - Checking literal slice bounds
//! - Tracking variables through nested static scopes, widening a variable to
//!   `unknown` when a branch that may not run changes its type
//! - Rejecting `break`/`continue` outside loops
//!
//! Inferences live in a side table keyed by node id; the AST is not mutated.

pub mod expr;
pub mod operations;
pub mod scope_manager;
pub mod stmt;
pub mod type_checker;

#[cfg(test)]
mod tests;
