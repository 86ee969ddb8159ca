use std::{cmp::Ordering, collections::HashMap};

use lazy_static::lazy_static;

use crate::{
    ast::{expressions::MatrixKind, types::Operator},
    errors::errors::ErrorImpl,
    type_checker::operations::{is_valid, Operands},
};

use super::value::{Matrix, Value};

pub type Kernel = fn(f64, f64) -> f64;
pub type Predicate = fn(Ordering) -> bool;

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn sub(a: f64, b: f64) -> f64 {
    a - b
}

fn mul(a: f64, b: f64) -> f64 {
    a * b
}

fn div(a: f64, b: f64) -> f64 {
    a / b
}

lazy_static! {
    /// Float kernels for the scalar and elementwise arithmetic operators.
    pub static ref ARITHMETIC: HashMap<Operator, Kernel> = HashMap::from([
        (Operator::Add, add as Kernel),
        (Operator::Sub, sub as Kernel),
        (Operator::Mul, mul as Kernel),
        (Operator::Div, div as Kernel),
        (Operator::ElementAdd, add as Kernel),
        (Operator::ElementSub, sub as Kernel),
        (Operator::ElementMul, mul as Kernel),
        (Operator::ElementDiv, div as Kernel),
    ]);

    pub static ref COMPARISON: HashMap<Operator, Predicate> = HashMap::from([
        (Operator::Equal, Ordering::is_eq as Predicate),
        (Operator::NotEqual, Ordering::is_ne as Predicate),
        (Operator::Less, Ordering::is_lt as Predicate),
        (Operator::LessEqual, Ordering::is_le as Predicate),
        (Operator::Greater, Ordering::is_gt as Predicate),
        (Operator::GreaterEqual, Ordering::is_ge as Predicate),
    ]);
}

fn kernel(operator: Operator) -> Result<Kernel, ErrorImpl> {
    ARITHMETIC.get(&operator).copied().ok_or_else(|| ErrorImpl::InvalidOperand {
        operator: String::from(operator.symbol()),
        found: String::from("numbers"),
    })
}

fn invalid_operands(operator: Operator, left: &Value, right: &Value) -> ErrorImpl {
    ErrorImpl::InvalidOperands {
        operator: String::from(operator.symbol()),
        left: left.describe(),
        right: right.describe(),
    }
}

fn shape_mismatch(operator: Operator, left: &Value, right: &Value) -> ErrorImpl {
    ErrorImpl::ShapeMismatch {
        operator: String::from(operator.symbol()),
        left: left.describe(),
        right: right.describe(),
    }
}

/// Checks the operand types against the same table the type checker uses.
fn ensure_valid(operator: Operator, left: &Value, right: &Value) -> Result<(), ErrorImpl> {
    if is_valid(Operands::Binary(left.value_type(), right.value_type()), operator) {
        Ok(())
    } else {
        Err(invalid_operands(operator, left, right))
    }
}

fn integer_arithmetic(operator: Operator, left: i64, right: i64) -> Result<Value, ErrorImpl> {
    let result = match operator {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => {
            if right == 0 {
                return Err(ErrorImpl::DivisionByZero);
            }
            return Ok(Value::Float(left as f64 / right as f64));
        }
        _ => None,
    };

    result.map(Value::Int).ok_or(ErrorImpl::IntegerOverflow)
}

/// `text * count`. A negative count gives an empty string.
fn repeat(text: &str, count: i64) -> Result<String, ErrorImpl> {
    let count = usize::try_from(count).unwrap_or(0);
    let length = text.len().checked_mul(count).ok_or(ErrorImpl::IntegerOverflow)?;

    let mut repeated = String::new();
    repeated
        .try_reserve_exact(length)
        .map_err(|_| ErrorImpl::IntegerOverflow)?;
    for _ in 0..count {
        repeated.push_str(text);
    }
    Ok(repeated)
}

/// `+ - * /` on concrete values.
pub fn arithmetic(operator: Operator, left: &Value, right: &Value) -> Result<Value, ErrorImpl> {
    ensure_valid(operator, left, right)?;

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => integer_arithmetic(operator, *a, *b),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
        (Value::Str(text), Value::Int(count)) => repeat(text, *count).map(Value::Str),
        (Value::Matrix(a), Value::Matrix(b)) => a
            .multiply(b)
            .map(Value::Matrix)
            .ok_or_else(|| shape_mismatch(operator, left, right)),
        _ => match (left.as_number(), right.as_number()) {
            (Some(_), Some(b)) if operator == Operator::Div && b == 0.0 => {
                Err(ErrorImpl::DivisionByZero)
            }
            (Some(a), Some(b)) => Ok(Value::Float(kernel(operator)?(a, b))),
            _ => Err(invalid_operands(operator, left, right)),
        },
    }
}

/// `.+ .- .* ./` on vectors or matrices of equal shape. Division follows IEEE.
pub fn elementwise(operator: Operator, left: &Value, right: &Value) -> Result<Value, ErrorImpl> {
    ensure_valid(operator, left, right)?;
    let apply = kernel(operator)?;

    let zip = |a: &[f64], b: &[f64]| -> Vec<f64> {
        a.iter().zip(b).map(|(x, y)| apply(*x, *y)).collect()
    };

    match (left, right) {
        (Value::Vector(a), Value::Vector(b)) if a.len() == b.len() => Ok(Value::Vector(zip(a, b))),
        (Value::Matrix(a), Value::Matrix(b)) if a.shape() == b.shape() => {
            Ok(Value::Matrix(Matrix::new(a.rows, a.cols, zip(&a.data, &b.data))))
        }
        (Value::Vector(_), Value::Vector(_)) | (Value::Matrix(_), Value::Matrix(_)) => {
            Err(shape_mismatch(operator, left, right))
        }
        _ => Err(invalid_operands(operator, left, right)),
    }
}

/// `== != < <= > >=`. A string and an integer are never equal.
pub fn compare(operator: Operator, left: &Value, right: &Value) -> Result<Value, ErrorImpl> {
    ensure_valid(operator, left, right)?;

    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Str(_), Value::Int(_)) => return Ok(Value::Bool(operator == Operator::NotEqual)),
        _ => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => return Err(invalid_operands(operator, left, right)),
        },
    };

    let predicate = COMPARISON
        .get(&operator)
        .ok_or_else(|| invalid_operands(operator, left, right))?;

    // NaN compares unequal to everything
    Ok(Value::Bool(match ordering {
        Some(ordering) => predicate(ordering),
        None => operator == Operator::NotEqual,
    }))
}

pub fn negate(value: &Value) -> Result<Value, ErrorImpl> {
    match value {
        Value::Int(a) => a.checked_neg().map(Value::Int).ok_or(ErrorImpl::IntegerOverflow),
        Value::Float(a) => Ok(Value::Float(-a)),
        other => Err(ErrorImpl::InvalidOperand {
            operator: String::from(Operator::Negate.symbol()),
            found: other.describe(),
        }),
    }
}

pub fn transpose(value: &Value) -> Result<Value, ErrorImpl> {
    match value {
        Value::Matrix(matrix) => Ok(Value::Matrix(matrix.transposed())),
        other => Err(ErrorImpl::InvalidOperand {
            operator: String::from("'"),
            found: other.describe(),
        }),
    }
}

/// Classifies an evaluated array literal: rows of numbers form a matrix,
/// numbers form a vector, anything else stays a list.
pub fn build_array(elements: Vec<Value>) -> Result<Value, ErrorImpl> {
    if elements.iter().all(|element| element.as_number().is_some()) {
        return Ok(Value::Vector(
            elements.iter().filter_map(Value::as_number).collect(),
        ));
    }

    if elements.iter().all(|element| matches!(element, Value::Vector(_))) {
        let rows: Vec<Vec<f64>> = elements
            .iter()
            .filter_map(|element| match element {
                Value::Vector(row) => Some(row.clone()),
                _ => None,
            })
            .collect();

        return Matrix::from_rows(&rows).map(Value::Matrix).ok_or_else(|| {
            let sizes: Vec<String> = rows.iter().map(|row| row.len().to_string()).collect();
            ErrorImpl::ShapeMismatch {
                operator: String::from("[]"),
                left: String::from("matrix rows"),
                right: format!("row sizes {}", sizes.join(", ")),
            }
        });
    }

    Ok(Value::List(elements))
}

/// Square matrix for `zeros`, `ones` and `eye`.
pub fn matrix_init(kind: MatrixKind, size: &Value) -> Result<Value, ErrorImpl> {
    let invalid = || ErrorImpl::InvalidMatrixSize {
        found: size.to_string(),
    };
    let count = match size {
        Value::Int(count) => usize::try_from(*count).map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    let matrix = match kind {
        MatrixKind::Zeros => Matrix::filled(count, 0.0),
        MatrixKind::Ones => Matrix::filled(count, 1.0),
        MatrixKind::Eye => Matrix::identity(count),
    };
    matrix.map(Value::Matrix).ok_or_else(invalid)
}
