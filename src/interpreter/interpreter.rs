use std::io::{self, Stdout, Write};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{memory::MemoryStack, stmt::evaluate_stmt, value::Value};

/// How a statement finished.
///
/// Loops consume `Break` and `Continue`; `Return` travels up to
/// [`Interpreter::run`] unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Normal,
    Break,
    Continue,
    Return(Option<Value>),
}

/// Tree-walking evaluator for a program that passed the type checker.
///
/// `print` output goes to `W`, so callers can capture it.
pub struct Interpreter<W: Write> {
    pub memory: MemoryStack,
    output: W,
}

impl Interpreter<Stdout> {
    pub fn new() -> Self {
        Interpreter::with_output(io::stdout())
    }
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(output: W) -> Self {
        Interpreter {
            memory: MemoryStack::new(),
            output,
        }
    }

    /// Runs every top-level statement, stopping at the first runtime error.
    ///
    /// Returns the value carried by a top-level `return`, if one ran.
    pub fn run(&mut self, program: &Program) -> Result<Option<Value>, Error> {
        for stmt in &program.body {
            match evaluate_stmt(self, stmt)? {
                Signal::Return(value) => {
                    tracing::debug!(value = ?value, "program returned");
                    return Ok(value);
                }
                // Rejected statically outside loops
                Signal::Break | Signal::Continue | Signal::Normal => {}
            }
        }

        Ok(None)
    }

    pub fn write_line(&mut self, line: &str, position: Position) -> Result<(), Error> {
        writeln!(self.output, "{}", line).map_err(|error| {
            Error::new(
                ErrorImpl::OutputFailed {
                    message: error.to_string(),
                },
                position,
            )
        })
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
