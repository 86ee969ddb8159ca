use std::fmt::Display;

use crate::ast::types::{Shape, ValueType};

/// Dense row-major matrix of floats.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        Matrix { rows, cols, data }
    }

    /// Square matrix with every cell set to `value`.
    ///
    /// Returns `None` when `size * size` cells cannot be allocated.
    pub fn filled(size: usize, value: f64) -> Option<Self> {
        let cells = size.checked_mul(size)?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells).ok()?;
        data.resize(cells, value);

        Some(Matrix::new(size, size, data))
    }

    pub fn identity(size: usize) -> Option<Self> {
        let mut matrix = Matrix::filled(size, 0.0)?;
        for i in 0..size {
            matrix.data[i * size + i] = 1.0;
        }
        Some(matrix)
    }

    /// Builds a matrix from equally long rows. Returns `None` on ragged input.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        Some(Matrix::new(rows.len(), cols, rows.concat()))
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn transposed(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.get(row, col));
            }
        }
        Matrix::new(self.cols, self.rows, data)
    }

    /// Matrix product, `None` when the inner dimensions differ.
    pub fn multiply(&self, other: &Matrix) -> Option<Matrix> {
        if self.cols != other.rows {
            return None;
        }

        let mut data = vec![0.0; self.rows * other.cols];
        for row in 0..self.rows {
            for col in 0..other.cols {
                data[row * other.cols + col] = (0..self.cols)
                    .map(|k| self.get(row, k) * other.get(k, col))
                    .sum();
            }
        }
        Some(Matrix::new(self.rows, other.cols, data))
    }

    pub fn shape(&self) -> Shape {
        Shape::Matrix(self.rows, self.cols)
    }
}

/// A runtime value.
///
/// Numbers stored inside vectors and matrices are always floats. `List` holds
/// array literals whose elements are not all numbers, e.g. a list of strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Vector(Vec<f64>),
    Matrix(Matrix),
    List(Vec<Value>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::IntNumber,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::String,
            Value::Bool(_) => ValueType::Boolean,
            Value::Vector(_) | Value::List(_) => ValueType::Vector,
            Value::Matrix(_) => ValueType::Matrix,
        }
    }

    pub fn shape(&self) -> Option<Shape> {
        match self {
            Value::Vector(elements) => Some(Shape::Vector(elements.len())),
            Value::List(elements) => Some(Shape::Vector(elements.len())),
            Value::Matrix(matrix) => Some(matrix.shape()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Int(value) => Some(value as f64),
            Value::Float(value) => Some(value),
            _ => None,
        }
    }

    /// Type name plus shape, used in error messages.
    pub fn describe(&self) -> String {
        match self.shape() {
            Some(shape) => format!("{} {}", self.value_type(), shape),
            None => self.value_type().to_string(),
        }
    }
}

fn write_numbers(f: &mut std::fmt::Formatter<'_>, numbers: &[f64]) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, number) in numbers.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", number)?;
    }
    write!(f, "]")
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            // Debug keeps the trailing `.0` on whole floats
            Value::Float(value) => write!(f, "{:?}", value),
            Value::Str(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Vector(elements) => write_numbers(f, elements),
            Value::Matrix(matrix) => {
                write!(f, "[")?;
                for row in 0..matrix.rows {
                    if row > 0 {
                        write!(f, ", ")?;
                    }
                    write_numbers(f, matrix.row(row))?;
                }
                write!(f, "]")
            }
            Value::List(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(String::from(value))
    }
}

impl From<Matrix> for Value {
    fn from(value: Matrix) -> Self {
        Value::Matrix(value)
    }
}
