use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}, {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether this error was raised while evaluating, as opposed to while
    /// reading or checking the program.
    pub fn is_runtime(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnboundVariable { .. }
                | ErrorImpl::InvalidOperands { .. }
                | ErrorImpl::InvalidOperand { .. }
                | ErrorImpl::InvalidIndex { .. }
                | ErrorImpl::ShapeMismatch { .. }
                | ErrorImpl::DivisionByZero
                | ErrorImpl::IntegerOverflow
                | ErrorImpl::InvalidMatrixSize { .. }
                | ErrorImpl::InvalidLoopBounds { .. }
                | ErrorImpl::ExpectedBoolean { .. }
                | ErrorImpl::NotSliceable { .. }
                | ErrorImpl::SliceAssignmentMismatch { .. }
                | ErrorImpl::OutputFailed { .. }
        ) || matches!(self.internal_error, ErrorImpl::IndexOutOfBounds { runtime: true, .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UninitializedVariable { .. } => "UninitializedVariable",
            ErrorImpl::MixedElementTypes { .. } => "MixedElementTypes",
            ErrorImpl::MatrixRowSizes { .. } => "MatrixRowSizes",
            ErrorImpl::MatrixSizeNotInteger { .. } => "MatrixSizeNotInteger",
            ErrorImpl::RangeNotInteger { .. } => "RangeNotInteger",
            ErrorImpl::InvalidNegation { .. } => "InvalidNegation",
            ErrorImpl::InvalidBinaryOperands { .. } => "InvalidBinaryOperands",
            ErrorImpl::IncompatibleMatrixMultiplication { .. } => "IncompatibleMatrixMultiplication",
            ErrorImpl::InvalidElementwiseOperands { .. } => "InvalidElementwiseOperands",
            ErrorImpl::IncompatibleShapes { .. } => "IncompatibleShapes",
            ErrorImpl::InvalidTransposition { .. } => "InvalidTransposition",
            ErrorImpl::InvalidComparison { .. } => "InvalidComparison",
            ErrorImpl::InvalidSliceArgument { .. } => "InvalidSliceArgument",
            ErrorImpl::SliceOfUninitialized { .. } => "SliceOfUninitialized",
            ErrorImpl::InvalidSliceSubject { .. } => "InvalidSliceSubject",
            ErrorImpl::MatrixSliceOfNonMatrix { .. } => "MatrixSliceOfNonMatrix",
            ErrorImpl::IndexOutOfBounds { .. } => "IndexOutOfBounds",
            ErrorImpl::OperationOnUninitialized { .. } => "OperationOnUninitialized",
            ErrorImpl::InvalidCompoundAssignment { .. } => "InvalidCompoundAssignment",
            ErrorImpl::LoopControlOutsideLoop { .. } => "LoopControlOutsideLoop",
            ErrorImpl::ConditionNotBoolean { .. } => "ConditionNotBoolean",
            ErrorImpl::UnboundVariable { .. } => "UnboundVariable",
            ErrorImpl::InvalidOperands { .. } => "InvalidOperands",
            ErrorImpl::InvalidOperand { .. } => "InvalidOperand",
            ErrorImpl::InvalidIndex { .. } => "InvalidIndex",
            ErrorImpl::ShapeMismatch { .. } => "ShapeMismatch",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::IntegerOverflow => "IntegerOverflow",
            ErrorImpl::InvalidMatrixSize { .. } => "InvalidMatrixSize",
            ErrorImpl::InvalidLoopBounds { .. } => "InvalidLoopBounds",
            ErrorImpl::ExpectedBoolean { .. } => "ExpectedBoolean",
            ErrorImpl::NotSliceable { .. } => "NotSliceable",
            ErrorImpl::SliceAssignmentMismatch { .. } => "SliceAssignmentMismatch",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UninitializedVariable { variable } => ErrorTip::Suggestion(format!(
                "Assign a value to `{}` before reading it",
                variable
            )),
            ErrorImpl::MatrixRowSizes { .. } => {
                ErrorTip::Suggestion(String::from("Every matrix row needs the same number of elements"))
            }
            ErrorImpl::IncompatibleMatrixMultiplication { .. } => ErrorTip::Suggestion(String::from(
                "The left matrix needs as many columns as the right matrix has rows",
            )),
            ErrorImpl::IncompatibleShapes { .. } | ErrorImpl::ShapeMismatch { .. } => {
                ErrorTip::Suggestion(String::from("Elementwise operands need identical shapes"))
            }
            ErrorImpl::IndexOutOfBounds { size, .. } => ErrorTip::Suggestion(format!(
                "Valid indices are 0 to {}",
                size.saturating_sub(1)
            )),
            ErrorImpl::OperationOnUninitialized { variable } => ErrorTip::Suggestion(format!(
                "Use `=` to declare `{}` first",
                variable
            )),
            ErrorImpl::LoopControlOutsideLoop { statement } => ErrorTip::Suggestion(format!(
                "`{}` is only valid inside `for` or `while`",
                statement
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::IntegerOverflow => {
                ErrorTip::Suggestion(String::from("Use float operands for large values"))
            }
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Front end
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Type checking
    #[error("uninitialized variable `{variable}` used")]
    UninitializedVariable { variable: String },
    #[error("vector elements should be of the same type, found {first} and {second}")]
    MixedElementTypes { first: String, second: String },
    #[error("matrix has rows with different sizes, row {row} has size {size} while previous rows have size {expected}")]
    MatrixRowSizes { row: usize, size: usize, expected: usize },
    #[error("size of `{constructor}` matrix should be an integer, found {found}")]
    MatrixSizeNotInteger { constructor: String, found: String },
    #[error("range should contain only integers, found {from} and {to}")]
    RangeNotInteger { from: String, to: String },
    #[error("negation is possible only for numbers, found {found}")]
    InvalidNegation { found: String },
    #[error("invalid types in binary expression `{operator}`, left type: {left}, right type: {right}")]
    InvalidBinaryOperands { operator: String, left: String, right: String },
    #[error("incompatible matrix sizes in matrix multiplication, found {left} and {right}")]
    IncompatibleMatrixMultiplication { left: String, right: String },
    #[error("elementwise operation `{operator}` is possible only on matrices and vectors, found {left} and {right}")]
    InvalidElementwiseOperands { operator: String, left: String, right: String },
    #[error("incompatible sizes in `{operator}`, found {left} and {right} but they should be equal")]
    IncompatibleShapes { operator: String, left: String, right: String },
    #[error("only a matrix can be transposed, found {found}")]
    InvalidTransposition { found: String },
    #[error("incompatible types for comparison `{operator}`, left type: {left}, right type: {right}")]
    InvalidComparison { operator: String, left: String, right: String },
    #[error("slice argument has to be an integer or a range, found {found}")]
    InvalidSliceArgument { found: String },
    #[error("only initialized variables can be sliced, `{variable}` is uninitialized")]
    SliceOfUninitialized { variable: String },
    #[error("slicing is possible only on vectors, matrices or strings, found {found}")]
    InvalidSliceSubject { found: String },
    #[error("two-axis slicing needs a matrix, found {found}")]
    MatrixSliceOfNonMatrix { found: String },
    #[error("index {index} is out of bounds for axis {axis} with size {size}")]
    IndexOutOfBounds { index: String, axis: usize, size: usize, runtime: bool },
    #[error("binary operation on uninitialized variable `{variable}`")]
    OperationOnUninitialized { variable: String },
    #[error("invalid types in assign-binary expression `{operator}`, left type: {left}, right type: {right}")]
    InvalidCompoundAssignment { operator: String, left: String, right: String },
    #[error("statement `{statement}` should be in a loop")]
    LoopControlOutsideLoop { statement: String },
    #[error("{construct} condition should be a boolean value, found {found}")]
    ConditionNotBoolean { construct: String, found: String },

    // Runtime
    #[error("variable `{variable}` is not bound")]
    UnboundVariable { variable: String },
    #[error("operation `{operator}` is not defined for {left} and {right}")]
    InvalidOperands { operator: String, left: String, right: String },
    #[error("operation `{operator}` is not defined for {found}")]
    InvalidOperand { operator: String, found: String },
    #[error("index should be an integer, found {found}")]
    InvalidIndex { found: String },
    #[error("shapes {left} and {right} do not match for `{operator}`")]
    ShapeMismatch { operator: String, left: String, right: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("matrix size should be a non-negative integer, found {found}")]
    InvalidMatrixSize { found: String },
    #[error("loop bounds should be integers, found {from} and {to}")]
    InvalidLoopBounds { from: String, to: String },
    #[error("expected a boolean, found {found}")]
    ExpectedBoolean { found: String },
    #[error("value {found} cannot be sliced with these arguments")]
    NotSliceable { found: String },
    #[error("cannot assign {found} to a slice of shape {expected}")]
    SliceAssignmentMismatch { expected: String, found: String },
    #[error("failed to write output: {message}")]
    OutputFailed { message: String },
}
