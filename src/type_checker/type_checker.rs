use std::collections::HashMap;

use crate::{
    ast::{
        ast::{NodeId, Program},
        types::{Operator, Shape, ValueType},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    scope_manager::{ScopeKind, ScopeManager, Symbol},
    stmt::check_stmt,
};

/// What the checker inferred for one node: its type and, for arrays, its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub ty: ValueType,
    pub shape: Option<Shape>,
}

impl TypeInfo {
    pub fn of(ty: ValueType) -> Self {
        TypeInfo { ty, shape: None }
    }

    pub fn array(ty: ValueType, shape: Option<Shape>) -> Self {
        TypeInfo { ty, shape }
    }

    pub fn unknown() -> Self {
        TypeInfo::of(ValueType::Unknown)
    }

    pub fn null() -> Self {
        TypeInfo::of(ValueType::Null)
    }
}

impl From<&Symbol> for TypeInfo {
    fn from(symbol: &Symbol) -> Self {
        TypeInfo::array(symbol.ty, symbol.shape)
    }
}

/// Result type of `+ - * /` once the operand pair is known to be possible.
pub fn arithmetic_result(left: ValueType, right: ValueType, operator: Operator) -> ValueType {
    if left == ValueType::Float || right == ValueType::Float || operator == Operator::Div {
        ValueType::Float
    } else if left == ValueType::String || right == ValueType::String {
        ValueType::String
    } else if left != ValueType::Unknown {
        left
    } else {
        right
    }
}

/// Static checker for a parsed program.
///
/// Walks the tree once, recording a `TypeInfo` for every node in a side table
/// keyed by `NodeId`. Violations are collected rather than raised so that one
/// run reports every problem in the program.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub scopes: ScopeManager,
    pub annotations: HashMap<NodeId, TypeInfo>,
    /// Element type of every vector literal, used to validate matrix rows.
    pub element_types: HashMap<NodeId, ValueType>,
    pub diagnostics: Vec<Error>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    /// Checks `program`, returning true when no diagnostic was produced.
    ///
    /// The program frame is left in place afterwards so that the final
    /// symbol types can be inspected with [`TypeChecker::symbol`].
    pub fn check(&mut self, program: &Program) -> bool {
        self.scopes = ScopeManager::new();
        self.annotations.clear();
        self.element_types.clear();
        self.diagnostics.clear();

        self.scopes.push(ScopeKind::Program);
        for stmt in &program.body {
            check_stmt(self, stmt);
        }
        self.annotate(program.id, TypeInfo::null());

        tracing::debug!(
            nodes = self.annotations.len(),
            errors = self.diagnostics.len(),
            "type check finished"
        );
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn annotation(&self, id: NodeId) -> Option<&TypeInfo> {
        self.annotations.get(&id)
    }

    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.scopes.lookup(name)
    }

    /// Records `info` for `id` and hands it back.
    pub fn annotate(&mut self, id: NodeId, info: TypeInfo) -> TypeInfo {
        self.annotations.insert(id, info);
        info
    }

    pub fn report(&mut self, error: ErrorImpl, position: Position) {
        let error = Error::new(error, position);
        tracing::debug!(error = %error, "type error");
        self.diagnostics.push(error);
    }
}
