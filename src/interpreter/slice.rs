//! Runtime slicing.
//!
//! Arguments are first evaluated to raw integers, then checked against the
//! axis lengths of the subject. Ranges are half-open: an index is valid when
//! `0 <= i < len`, a range when `0 <= a <= b <= len`.

use crate::{ast::types::Shape, errors::errors::ErrorImpl};

use super::value::{Matrix, Value};

/// An evaluated slice argument before bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Index(i64),
    Range(i64, i64),
}

/// A bounds-checked selection along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    At(usize),
    Span(usize, usize),
}

impl Axis {
    fn len(&self) -> usize {
        match *self {
            Axis::At(_) => 1,
            Axis::Span(from, to) => to - from,
        }
    }
}

fn axis_lengths(value: &Value) -> Option<Vec<usize>> {
    match value {
        Value::Str(text) => Some(vec![text.chars().count()]),
        Value::Vector(elements) => Some(vec![elements.len()]),
        Value::List(elements) => Some(vec![elements.len()]),
        Value::Matrix(matrix) => Some(vec![matrix.rows, matrix.cols]),
        _ => None,
    }
}

fn resolve(selector: Selector, axis: usize, size: usize) -> Result<Axis, ErrorImpl> {
    let out_of_bounds = |index: String| ErrorImpl::IndexOutOfBounds {
        index,
        axis,
        size,
        runtime: true,
    };

    match selector {
        Selector::Index(index) if index >= 0 && (index as usize) < size => Ok(Axis::At(index as usize)),
        Selector::Index(index) => Err(out_of_bounds(index.to_string())),
        Selector::Range(from, to) if from >= 0 && from <= to && to as usize <= size => {
            Ok(Axis::Span(from as usize, to as usize))
        }
        Selector::Range(from, to) => Err(out_of_bounds(format!("{}:{}", from, to))),
    }
}

/// Checks `selectors` against `value`, filling unspecified trailing axes
/// with their full range.
pub fn resolve_axes(value: &Value, selectors: &[Selector]) -> Result<Vec<Axis>, ErrorImpl> {
    let not_sliceable = || ErrorImpl::NotSliceable {
        found: value.describe(),
    };

    let lengths = axis_lengths(value).ok_or_else(not_sliceable)?;
    if selectors.is_empty() || selectors.len() > lengths.len() {
        return Err(not_sliceable());
    }

    lengths
        .iter()
        .enumerate()
        .map(|(axis, &size)| match selectors.get(axis) {
            Some(&selector) => resolve(selector, axis, size),
            None => Ok(Axis::Span(0, size)),
        })
        .collect()
}

/// Reads the part of `value` selected by `axes`.
pub fn read(value: &Value, axes: &[Axis]) -> Result<Value, ErrorImpl> {
    let result = match (value, axes) {
        (Value::Str(text), [axis]) => {
            let (from, to) = bounds(*axis);
            Value::Str(text.chars().skip(from).take(to - from).collect())
        }
        (Value::Vector(elements), [Axis::At(i)]) => Value::Float(elements[*i]),
        (Value::Vector(elements), [Axis::Span(from, to)]) => Value::Vector(elements[*from..*to].to_vec()),
        (Value::List(elements), [Axis::At(i)]) => elements[*i].clone(),
        (Value::List(elements), [Axis::Span(from, to)]) => Value::List(elements[*from..*to].to_vec()),
        (Value::Matrix(matrix), [rows, cols]) => read_matrix(matrix, *rows, *cols),
        _ => {
            return Err(ErrorImpl::NotSliceable {
                found: value.describe(),
            })
        }
    };

    Ok(result)
}

fn bounds(axis: Axis) -> (usize, usize) {
    match axis {
        Axis::At(i) => (i, i + 1),
        Axis::Span(from, to) => (from, to),
    }
}

fn read_matrix(matrix: &Matrix, rows: Axis, cols: Axis) -> Value {
    let (row_from, row_to) = bounds(rows);
    let (col_from, col_to) = bounds(cols);

    let mut data = Vec::with_capacity(rows.len() * cols.len());
    for row in row_from..row_to {
        data.extend_from_slice(&matrix.row(row)[col_from..col_to]);
    }

    match (rows, cols) {
        (Axis::At(_), Axis::At(_)) => Value::Float(data[0]),
        (Axis::At(_), Axis::Span(..)) | (Axis::Span(..), Axis::At(_)) => Value::Vector(data),
        (Axis::Span(..), Axis::Span(..)) => Value::Matrix(Matrix::new(rows.len(), cols.len(), data)),
    }
}

/// Overwrites the part of `target` selected by `axes` with `value`.
///
/// The replacement must have exactly the shape a read of the same slice
/// would produce.
pub fn write(target: &mut Value, axes: &[Axis], value: Value) -> Result<(), ErrorImpl> {
    let expected = expected_shape(target, axes);
    let mismatch = |value: &Value| ErrorImpl::SliceAssignmentMismatch {
        expected: expected.clone(),
        found: value.describe(),
    };

    match (target, axes) {
        (Value::Str(text), [axis]) => {
            let Value::Str(replacement) = &value else {
                return Err(mismatch(&value));
            };
            let (from, to) = bounds(*axis);
            let chars: Vec<char> = text.chars().collect();
            *text = chars[..from]
                .iter()
                .chain(replacement.chars().collect::<Vec<char>>().iter())
                .chain(chars[to..].iter())
                .collect();
        }
        (Value::Vector(elements), [axis]) => {
            let (from, to) = bounds(*axis);
            let replacement = numbers(&value, *axis).ok_or_else(|| mismatch(&value))?;
            if replacement.len() != to - from {
                return Err(mismatch(&value));
            }
            elements.splice(from..to, replacement);
        }
        (Value::List(elements), [Axis::At(i)]) => elements[*i] = value,
        (Value::List(elements), [Axis::Span(from, to)]) => {
            let replacement = match value {
                Value::List(items) if items.len() == to - from => items,
                Value::Vector(items) if items.len() == to - from => {
                    items.into_iter().map(Value::Float).collect()
                }
                other => return Err(mismatch(&other)),
            };
            elements.splice(*from..*to, replacement);
        }
        (Value::Matrix(matrix), [rows, cols]) => {
            let replacement = match (&value, rows, cols) {
                (Value::Matrix(block), Axis::Span(..), Axis::Span(..))
                    if block.rows == rows.len() && block.cols == cols.len() =>
                {
                    block.data.clone()
                }
                (Value::Matrix(_), _, _) => return Err(mismatch(&value)),
                (_, Axis::At(_), Axis::At(_)) => {
                    vec![value.as_number().ok_or_else(|| mismatch(&value))?]
                }
                (Value::Vector(items), _, _) if items.len() == rows.len() * cols.len() => items.clone(),
                _ => return Err(mismatch(&value)),
            };

            let (row_from, row_to) = bounds(*rows);
            let (col_from, col_to) = bounds(*cols);
            let mut replacement = replacement.into_iter();
            for row in row_from..row_to {
                for col in col_from..col_to {
                    if let Some(number) = replacement.next() {
                        matrix.set(row, col, number);
                    }
                }
            }
        }
        (target, _) => {
            return Err(ErrorImpl::NotSliceable {
                found: target.describe(),
            })
        }
    }

    Ok(())
}

/// Numbers to splice into a vector: a scalar for an index, a vector for a range.
fn numbers(value: &Value, axis: Axis) -> Option<Vec<f64>> {
    match (axis, value) {
        (Axis::At(_), _) => value.as_number().map(|number| vec![number]),
        (Axis::Span(..), Value::Vector(items)) => Some(items.clone()),
        _ => None,
    }
}

fn expected_shape(target: &Value, axes: &[Axis]) -> String {
    match (target, axes) {
        (Value::Matrix(_), [Axis::Span(..), Axis::Span(..)]) => {
            Shape::Matrix(axes[0].len(), axes[1].len()).to_string()
        }
        (Value::Matrix(_), [Axis::At(_), Axis::At(_)]) => String::from("(scalar)"),
        (Value::Matrix(_), [rows, cols]) => Shape::Vector(rows.len() * cols.len()).to_string(),
        (_, [Axis::At(_)]) => String::from("(scalar)"),
        (_, [axis]) => Shape::Vector(axis.len()).to_string(),
        _ => String::new(),
    }
}
