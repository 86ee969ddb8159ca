use crate::Span;

use super::{
    ast::{Expr, NodeId},
    types::Operator,
};

// LITERALS

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    Int(i64),
    Float(f64),
}

/// Number Expression
/// Represents a numeric literal; integer and float literals stay distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub id: NodeId,
    pub value: NumberLiteral,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub id: NodeId,
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub id: NodeId,
    pub name: String,
    pub span: Span,
}

// ARRAYS

/// Vector Expression
/// `[a, b, c]`. A vector whose elements are vectors is a matrix literal.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorExpr {
    pub id: NodeId,
    pub elements: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    Zeros,
    Ones,
    Eye,
}

impl MatrixKind {
    pub fn name(&self) -> &'static str {
        match self {
            MatrixKind::Zeros => "zeros",
            MatrixKind::Ones => "ones",
            MatrixKind::Eye => "eye",
        }
    }
}

/// `zeros(n)`, `ones(n)` or `eye(n)`
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixInitExpr {
    pub id: NodeId,
    pub kind: MatrixKind,
    pub argument: Box<Expr>,
    pub span: Span,
}

/// Half-open range `from:to`, used by `for` headers and slice arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeExpr {
    pub id: NodeId,
    pub from: Box<Expr>,
    pub to: Box<Expr>,
    pub span: Span,
}

// OPERATIONS

#[derive(Debug, Clone, PartialEq)]
pub struct NegationExpr {
    pub id: NodeId,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Binary Expression
/// Shared by arithmetic, elementwise and comparison expressions; the wrapping
/// `Expr` variant says which family it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub id: NodeId,
    pub operator: Operator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransposeExpr {
    pub id: NodeId,
    pub operand: Box<Expr>,
    pub span: Span,
}

// SLICING

#[derive(Debug, Clone, PartialEq)]
pub enum SliceArgumentKind {
    Index(Box<Expr>),
    Range(RangeExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliceArgument {
    pub id: NodeId,
    pub kind: SliceArgumentKind,
    pub span: Span,
}

/// Slice Expression
/// `id[a]` or `id[a, b]`, each argument an index or a range.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceExpr {
    pub id: NodeId,
    pub identifier: IdentifierExpr,
    pub arguments: Vec<SliceArgument>,
    pub span: Span,
}
