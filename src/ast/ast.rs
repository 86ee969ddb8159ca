use crate::Span;

use super::{expressions::*, statements::*};

/// Unique per-node key handed out by the parser.
///
/// The type checker stores its inferences in a side table keyed by this id,
/// so the tree itself is never mutated after parsing.
pub type NodeId = usize;

/// Expressions
///
/// A closed set of expression kinds. Both the checker and the interpreter
/// dispatch over it with exhaustive matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Identifier(IdentifierExpr),
    Vector(VectorExpr),
    MatrixInit(MatrixInitExpr),
    Negation(NegationExpr),
    /// `+ - * /`
    Arithmetic(BinaryExpr),
    /// `.+ .- .* ./`
    MatrixArithmetic(BinaryExpr),
    /// `== != < <= > >=`
    Comparison(BinaryExpr),
    Transpose(TransposeExpr),
    Slice(SliceExpr),
}

impl Expr {
    pub fn id(&self) -> NodeId {
        match self {
            Expr::Number(expr) => expr.id,
            Expr::String(expr) => expr.id,
            Expr::Identifier(expr) => expr.id,
            Expr::Vector(expr) => expr.id,
            Expr::MatrixInit(expr) => expr.id,
            Expr::Negation(expr) => expr.id,
            Expr::Arithmetic(expr) | Expr::MatrixArithmetic(expr) | Expr::Comparison(expr) => expr.id,
            Expr::Transpose(expr) => expr.id,
            Expr::Slice(expr) => expr.id,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
            Expr::Vector(expr) => &expr.span,
            Expr::MatrixInit(expr) => &expr.span,
            Expr::Negation(expr) => &expr.span,
            Expr::Arithmetic(expr) | Expr::MatrixArithmetic(expr) | Expr::Comparison(expr) => &expr.span,
            Expr::Transpose(expr) => &expr.span,
            Expr::Slice(expr) => &expr.span,
        }
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Block(BlockStmt),
    Return(ReturnStmt),
    LoopControl(LoopControlStmt),
    For(ForStmt),
    While(WhileStmt),
    If(IfStmt),
    Print(PrintStmt),
}

impl Stmt {
    pub fn id(&self) -> NodeId {
        match self {
            Stmt::Assignment(stmt) => stmt.id,
            Stmt::Block(stmt) => stmt.id,
            Stmt::Return(stmt) => stmt.id,
            Stmt::LoopControl(stmt) => stmt.id,
            Stmt::For(stmt) => stmt.id,
            Stmt::While(stmt) => stmt.id,
            Stmt::If(stmt) => stmt.id,
            Stmt::Print(stmt) => stmt.id,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::LoopControl(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
        }
    }
}

/// Root of a parsed source file: the top-level statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: NodeId,
    pub body: Vec<Stmt>,
    pub span: Span,
}
