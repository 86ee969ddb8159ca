//! Static scopes for the type checker.
//!
//! Scopes nest as a stack of tagged frames. Lookup searches innermost to
//! outermost. A symbol is written into the frame that already owns the name,
//! so a loop or branch can update the recorded type of an outer variable
//! without shadowing it.

use std::{collections::HashMap, fmt::Display};

use crate::ast::types::{Shape, ValueType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Program,
    For,
    While,
    If,
}

impl ScopeKind {
    pub fn is_loop(&self) -> bool {
        matches!(self, ScopeKind::For | ScopeKind::While)
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, ScopeKind::While | ScopeKind::If)
    }
}

impl Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScopeKind::Program => "program",
            ScopeKind::For => "for",
            ScopeKind::While => "while",
            ScopeKind::If => "if",
        };
        write!(f, "{}", name)
    }
}

/// A variable as far as the checker knows it.
///
/// `shape` is recorded for vector and matrix symbols only.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub ty: ValueType,
    pub shape: Option<Shape>,
}

impl Symbol {
    pub fn new(name: &str, ty: ValueType, shape: Option<Shape>) -> Self {
        let shape = if ty.is_array() { shape } else { None };
        Symbol {
            name: String::from(name),
            ty,
            shape,
        }
    }
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    symbols: HashMap<String, Symbol>,
}

#[derive(Debug)]
pub struct ScopeManager {
    scopes: Vec<Scope>,
    loop_count: usize,
}

impl Default for ScopeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeManager {
    /// Creates a manager with no frames. Push `ScopeKind::Program` first.
    pub fn new() -> Self {
        ScopeManager {
            scopes: Vec::new(),
            loop_count: 0,
        }
    }

    pub fn push(&mut self, kind: ScopeKind) {
        if kind.is_loop() {
            self.loop_count += 1;
        }
        tracing::debug!(scope = %kind, depth = self.scopes.len() + 1, "push scope");
        self.scopes.push(Scope {
            kind,
            symbols: HashMap::new(),
        });
    }

    pub fn pop(&mut self) {
        if let Some(scope) = self.scopes.pop() {
            if scope.kind.is_loop() {
                self.loop_count -= 1;
            }
            tracing::debug!(scope = %scope.kind, symbols = scope.symbols.len(), "pop scope");
        }
    }

    /// Writes `symbol` into the frame that owns its name, else the innermost frame.
    pub fn declare(&mut self, symbol: Symbol) {
        let index = self
            .scopes
            .iter()
            .rposition(|scope| scope.symbols.contains_key(&symbol.name))
            .or_else(|| self.scopes.len().checked_sub(1));

        let Some(index) = index else {
            return;
        };
        let scope = &mut self.scopes[index];

        tracing::debug!(
            name = %symbol.name,
            ty = %symbol.ty,
            scope = %scope.kind,
            "declare symbol"
        );
        scope.symbols.insert(symbol.name.clone(), symbol);
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.symbols.get(name))
    }

    pub fn is_in_loop(&self) -> bool {
        self.loop_count > 0
    }

    /// True when a branch or loop body may not run: any active `while` or `if` frame.
    pub fn is_in_conditional(&self) -> bool {
        self.scopes.iter().any(|scope| scope.kind.is_conditional())
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
