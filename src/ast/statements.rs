use std::slice::Iter;

use crate::Span;

use super::{
    ast::{Expr, NodeId, Stmt},
    expressions::{IdentifierExpr, RangeExpr, SliceExpr},
    types::Operator,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub id: NodeId,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    Identifier(IdentifierExpr),
    Slice(SliceExpr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOperator {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl AssignOperator {
    /// The binary operator a compound assignment applies, `None` for plain `=`.
    pub fn binary(&self) -> Option<Operator> {
        match self {
            AssignOperator::Assign => None,
            AssignOperator::Add => Some(Operator::Add),
            AssignOperator::Sub => Some(Operator::Sub),
            AssignOperator::Mul => Some(Operator::Mul),
            AssignOperator::Div => Some(Operator::Div),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::Add => "+=",
            AssignOperator::Sub => "-=",
            AssignOperator::Mul => "*=",
            AssignOperator::Div => "/=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub id: NodeId,
    pub target: AssignTarget,
    pub operator: AssignOperator,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub id: NodeId,
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Break,
    Continue,
}

impl LoopControl {
    pub fn keyword(&self) -> &'static str {
        match self {
            LoopControl::Break => "break",
            LoopControl::Continue => "continue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopControlStmt {
    pub id: NodeId,
    pub kind: LoopControl,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub id: NodeId,
    pub variable: IdentifierExpr,
    pub range: RangeExpr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub id: NodeId,
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub id: NodeId,
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub id: NodeId,
    pub arguments: Vec<Expr>,
    pub span: Span,
}
