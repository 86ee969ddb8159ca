//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used by every stage. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the front end, the type checker and evaluation
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
