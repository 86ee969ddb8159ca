#![allow(clippy::module_inception)]

use std::{fmt::Display, io::Write, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorTip},
    interpreter::{interpreter::Interpreter, value::Value},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::TypeChecker,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Result of a complete run: the value carried by a top-level `return`, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub returned: Option<Value>,
}

/// Runs a program from source text through every stage.
///
/// Front-end errors stop immediately with a single error. Type-check
/// diagnostics are all returned together and the program is not evaluated.
/// A runtime error stops evaluation at the first failure.
pub fn run_source<W: Write>(source: &str, file: &str, output: W) -> Result<Outcome, Vec<Error>> {
    let tokens = tokenize(source.to_string(), Some(String::from(file))).map_err(|e| vec![e])?;
    let (_, program) = parse(tokens, Rc::new(String::from(file)));
    let program = program.map_err(|e| vec![e])?;

    let mut type_checker = TypeChecker::new();
    if !type_checker.check(&program) {
        return Err(type_checker.take_diagnostics());
    }

    let mut interpreter = Interpreter::with_output(output);
    let returned = interpreter.run(&program).map_err(|e| vec![e])?;

    Ok(Outcome { returned })
}

/// Returns the text of the given 1-based line, if it exists.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line as usize - 1)
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: message
        -> program.m
           |
        20 | x = [1, 2] .+ [1];
           | ---------^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}", file, position);

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
