use crate::{
    ast::{
        ast::Expr,
        expressions::{NumberLiteral, SliceArgument, SliceArgumentKind, SliceExpr},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    memory::MemoryStack,
    operations::{arithmetic, build_array, compare, elementwise, matrix_init, negate, transpose},
    slice::{read, resolve_axes, Axis, Selector},
    value::Value,
};

fn at(position: Position) -> impl FnOnce(ErrorImpl) -> Error {
    move |error| Error::new(error, position)
}

pub fn evaluate_expr(memory: &MemoryStack, expr: &Expr) -> Result<Value, Error> {
    let position = expr.get_span().start;

    match expr {
        Expr::Number(number) => Ok(match number.value {
            NumberLiteral::Int(value) => Value::Int(value),
            NumberLiteral::Float(value) => Value::Float(value),
        }),
        Expr::String(string) => Ok(Value::Str(string.value.clone())),
        Expr::Identifier(identifier) => memory.get(&identifier.name).cloned().ok_or_else(|| {
            Error::new(
                ErrorImpl::UnboundVariable {
                    variable: identifier.name.clone(),
                },
                position,
            )
        }),
        Expr::Vector(vector) => {
            let elements = vector
                .elements
                .iter()
                .map(|element| evaluate_expr(memory, element))
                .collect::<Result<Vec<Value>, Error>>()?;
            build_array(elements).map_err(at(position))
        }
        Expr::MatrixInit(init) => {
            let size = evaluate_expr(memory, &init.argument)?;
            matrix_init(init.kind, &size).map_err(at(init.argument.get_span().start))
        }
        Expr::Negation(negation) => {
            let operand = evaluate_expr(memory, &negation.operand)?;
            negate(&operand).map_err(at(position))
        }
        Expr::Arithmetic(binary) => {
            let left = evaluate_expr(memory, &binary.left)?;
            let right = evaluate_expr(memory, &binary.right)?;
            arithmetic(binary.operator, &left, &right).map_err(at(position))
        }
        Expr::MatrixArithmetic(binary) => {
            let left = evaluate_expr(memory, &binary.left)?;
            let right = evaluate_expr(memory, &binary.right)?;
            elementwise(binary.operator, &left, &right).map_err(at(position))
        }
        Expr::Comparison(binary) => {
            let left = evaluate_expr(memory, &binary.left)?;
            let right = evaluate_expr(memory, &binary.right)?;
            compare(binary.operator, &left, &right).map_err(at(position))
        }
        Expr::Transpose(transpose_expr) => {
            let operand = evaluate_expr(memory, &transpose_expr.operand)?;
            transpose(&operand).map_err(at(position))
        }
        Expr::Slice(slice) => evaluate_slice(memory, slice),
    }
}

/// Evaluates a loop bound or index, which must be an integer.
pub fn evaluate_integer(memory: &MemoryStack, expr: &Expr) -> Result<i64, Error> {
    match evaluate_expr(memory, expr)? {
        Value::Int(value) => Ok(value),
        other => Err(Error::new(
            ErrorImpl::InvalidIndex {
                found: other.describe(),
            },
            expr.get_span().start,
        )),
    }
}

fn evaluate_selector(memory: &MemoryStack, argument: &SliceArgument) -> Result<Selector, Error> {
    match &argument.kind {
        SliceArgumentKind::Index(index) => Ok(Selector::Index(evaluate_integer(memory, index)?)),
        SliceArgumentKind::Range(range) => Ok(Selector::Range(
            evaluate_integer(memory, &range.from)?,
            evaluate_integer(memory, &range.to)?,
        )),
    }
}

/// Resolves the axes a slice selects on the current value of its variable.
pub fn evaluate_axes(memory: &MemoryStack, slice: &SliceExpr) -> Result<(Value, Vec<Axis>), Error> {
    let selectors = slice
        .arguments
        .iter()
        .map(|argument| evaluate_selector(memory, argument))
        .collect::<Result<Vec<Selector>, Error>>()?;

    let subject = memory.get(&slice.identifier.name).cloned().ok_or_else(|| {
        Error::new(
            ErrorImpl::UnboundVariable {
                variable: slice.identifier.name.clone(),
            },
            slice.identifier.span.start,
        )
    })?;

    let axes = resolve_axes(&subject, &selectors).map_err(|error| {
        // Point at the offending argument when the failure is a bound
        let position = match &error {
            ErrorImpl::IndexOutOfBounds { axis, .. } => slice
                .arguments
                .get(*axis)
                .map_or(slice.span.start, |argument| argument.span.start),
            _ => slice.span.start,
        };
        Error::new(error, position)
    })?;

    Ok((subject, axes))
}

fn evaluate_slice(memory: &MemoryStack, slice: &SliceExpr) -> Result<Value, Error> {
    let (subject, axes) = evaluate_axes(memory, slice)?;
    read(&subject, &axes).map_err(at(slice.span.start))
}
