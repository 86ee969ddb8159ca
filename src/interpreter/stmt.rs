use std::io::Write;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{
            AssignTarget, AssignmentStmt, ForStmt, IfStmt, LoopControl, PrintStmt, WhileStmt,
        },
        types::Operator,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    expr::{evaluate_axes, evaluate_expr},
    interpreter::{Interpreter, Signal},
    operations::arithmetic,
    slice::{read, write},
    value::Value,
};

pub fn evaluate_stmt<W: Write>(interpreter: &mut Interpreter<W>, stmt: &Stmt) -> Result<Signal, Error> {
    tracing::trace!(id = stmt.id(), line = stmt.get_span().start.line, "evaluate statement");

    match stmt {
        Stmt::Assignment(assignment) => {
            evaluate_assignment(interpreter, assignment)?;
            Ok(Signal::Normal)
        }
        Stmt::Block(block) => {
            for stmt in block.iter() {
                let signal = evaluate_stmt(interpreter, stmt)?;
                if signal != Signal::Normal {
                    return Ok(signal);
                }
            }
            Ok(Signal::Normal)
        }
        Stmt::Return(return_stmt) => {
            let value = match &return_stmt.value {
                Some(value) => Some(evaluate_expr(&interpreter.memory, value)?),
                None => None,
            };
            Ok(Signal::Return(value))
        }
        Stmt::LoopControl(control) => Ok(match control.kind {
            LoopControl::Break => Signal::Break,
            LoopControl::Continue => Signal::Continue,
        }),
        Stmt::For(for_stmt) => evaluate_for(interpreter, for_stmt),
        Stmt::While(while_stmt) => evaluate_while(interpreter, while_stmt),
        Stmt::If(if_stmt) => evaluate_if(interpreter, if_stmt),
        Stmt::Print(print) => {
            evaluate_print(interpreter, print)?;
            Ok(Signal::Normal)
        }
    }
}

fn combine(
    operator: Option<Operator>,
    current: impl FnOnce() -> Result<Value, Error>,
    value: Value,
    position: Position,
) -> Result<Value, Error> {
    match operator {
        None => Ok(value),
        Some(operator) => {
            arithmetic(operator, &current()?, &value).map_err(|error| Error::new(error, position))
        }
    }
}

/// Plain assignment stores the value. A slice target reads the whole array,
/// replaces the addressed region and writes the array back.
fn evaluate_assignment<W: Write>(
    interpreter: &mut Interpreter<W>,
    assignment: &AssignmentStmt,
) -> Result<(), Error> {
    let value = evaluate_expr(&interpreter.memory, &assignment.value)?;
    let operator = assignment.operator.binary();
    let position = assignment.span.start;

    match &assignment.target {
        AssignTarget::Identifier(identifier) => {
            let memory = &interpreter.memory;
            let value = combine(
                operator,
                || {
                    memory.get(&identifier.name).cloned().ok_or_else(|| {
                        Error::new(
                            ErrorImpl::UnboundVariable {
                                variable: identifier.name.clone(),
                            },
                            identifier.span.start,
                        )
                    })
                },
                value,
                position,
            )?;
            interpreter.memory.set(&identifier.name, value);
        }
        AssignTarget::Slice(slice) => {
            let (mut subject, axes) = evaluate_axes(&interpreter.memory, slice)?;
            let value = combine(
                operator,
                || read(&subject, &axes).map_err(|error| Error::new(error, slice.span.start)),
                value,
                position,
            )?;

            write(&mut subject, &axes, value).map_err(|error| Error::new(error, position))?;
            interpreter.memory.set(&slice.identifier.name, subject);
        }
    }

    Ok(())
}

fn evaluate_condition(interpreter: &Interpreter<impl Write>, condition: &Expr) -> Result<bool, Error> {
    match evaluate_expr(&interpreter.memory, condition)? {
        Value::Bool(value) => Ok(value),
        other => Err(Error::new(
            ErrorImpl::ExpectedBoolean {
                found: other.describe(),
            },
            condition.get_span().start,
        )),
    }
}

/// Runs one loop iteration in its own frame. The frame is popped before any
/// error or signal leaves the iteration.
fn evaluate_iteration<W: Write>(
    interpreter: &mut Interpreter<W>,
    body: &Stmt,
    binding: Option<(&str, Value)>,
) -> Result<Signal, Error> {
    interpreter.memory.push();
    if let Some((name, value)) = binding {
        // Updates an outer binding of the same name, like the checker does
        interpreter.memory.set(name, value);
    }

    let result = evaluate_stmt(interpreter, body);
    interpreter.memory.pop();
    result
}

fn evaluate_for<W: Write>(interpreter: &mut Interpreter<W>, for_stmt: &ForStmt) -> Result<Signal, Error> {
    let from = evaluate_expr(&interpreter.memory, &for_stmt.range.from)?;
    let to = evaluate_expr(&interpreter.memory, &for_stmt.range.to)?;

    let (Value::Int(from), Value::Int(to)) = (&from, &to) else {
        return Err(Error::new(
            ErrorImpl::InvalidLoopBounds {
                from: from.describe(),
                to: to.describe(),
            },
            for_stmt.range.span.start,
        ));
    };

    for i in *from..*to {
        let binding = Some((for_stmt.variable.name.as_str(), Value::Int(i)));
        match evaluate_iteration(interpreter, &for_stmt.body, binding)? {
            Signal::Break => break,
            Signal::Continue | Signal::Normal => {}
            signal @ Signal::Return(_) => return Ok(signal),
        }
    }

    Ok(Signal::Normal)
}

fn evaluate_while<W: Write>(
    interpreter: &mut Interpreter<W>,
    while_stmt: &WhileStmt,
) -> Result<Signal, Error> {
    while evaluate_condition(interpreter, &while_stmt.condition)? {
        match evaluate_iteration(interpreter, &while_stmt.body, None)? {
            Signal::Break => break,
            Signal::Continue | Signal::Normal => {}
            signal @ Signal::Return(_) => return Ok(signal),
        }
    }

    Ok(Signal::Normal)
}

fn evaluate_if<W: Write>(interpreter: &mut Interpreter<W>, if_stmt: &IfStmt) -> Result<Signal, Error> {
    if evaluate_condition(interpreter, &if_stmt.condition)? {
        evaluate_stmt(interpreter, &if_stmt.then_body)
    } else if let Some(else_body) = &if_stmt.else_body {
        evaluate_stmt(interpreter, else_body)
    } else {
        Ok(Signal::Normal)
    }
}

/// Each argument is evaluated on its own and the results are joined with `, `.
fn evaluate_print<W: Write>(interpreter: &mut Interpreter<W>, print: &PrintStmt) -> Result<(), Error> {
    let values = print
        .arguments
        .iter()
        .map(|argument| evaluate_expr(&interpreter.memory, argument).map(|value| value.to_string()))
        .collect::<Result<Vec<String>, Error>>()?;

    interpreter.write_line(&values.join(", "), print.span.start)
}
