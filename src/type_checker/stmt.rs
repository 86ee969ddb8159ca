use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{AssignTarget, AssignmentStmt, ForStmt, IfStmt, WhileStmt},
        types::{Operator, ValueType},
    },
    errors::errors::ErrorImpl,
};

use super::{
    expr::{check_expr, check_range, check_slice},
    operations::{is_valid, Operands},
    scope_manager::{ScopeKind, Symbol},
    type_checker::{arithmetic_result, TypeChecker, TypeInfo},
};

pub fn check_stmt(checker: &mut TypeChecker, stmt: &Stmt) {
    match stmt {
        Stmt::Assignment(assignment) => {
            check_assignment(checker, assignment);
            return;
        }
        Stmt::Block(block) => {
            for stmt in block.iter() {
                check_stmt(checker, stmt);
            }
        }
        Stmt::Return(return_stmt) => {
            if let Some(value) = &return_stmt.value {
                check_expr(checker, value);
            }
        }
        Stmt::LoopControl(control) => {
            if !checker.scopes.is_in_loop() {
                checker.report(
                    ErrorImpl::LoopControlOutsideLoop {
                        statement: String::from(control.kind.keyword()),
                    },
                    control.span.start,
                );
            }
        }
        Stmt::For(for_stmt) => check_for(checker, for_stmt),
        Stmt::While(while_stmt) => check_while(checker, while_stmt),
        Stmt::If(if_stmt) => check_if(checker, if_stmt),
        Stmt::Print(print) => {
            for argument in &print.arguments {
                check_expr(checker, argument);
            }
        }
    }

    checker.annotate(stmt.id(), TypeInfo::null());
}

/// Replaces whatever is known about `name` with `Unknown`.
fn widen(checker: &mut TypeChecker, symbol: &Symbol) {
    tracing::debug!(name = %symbol.name, from = %symbol.ty, "widening symbol to unknown");
    checker
        .scopes
        .declare(Symbol::new(&symbol.name, ValueType::Unknown, None));
}

fn check_assignment(checker: &mut TypeChecker, assignment: &AssignmentStmt) {
    let value = check_expr(checker, &assignment.value);

    let identifier = match &assignment.target {
        AssignTarget::Identifier(identifier) => identifier,
        AssignTarget::Slice(slice) => {
            // The node mirrors what the slice selects
            let info = check_slice(checker, slice);
            checker.annotate(slice.id, info);
            checker.annotate(assignment.id, info);
            return;
        }
    };

    checker.annotate(assignment.id, TypeInfo::null());
    let existing = checker.scopes.lookup(&identifier.name).cloned();

    match (existing, assignment.operator.binary()) {
        (None, None) => {
            checker
                .scopes
                .declare(Symbol::new(&identifier.name, value.ty, value.shape));
        }
        (None, Some(_)) => {
            checker.report(
                ErrorImpl::OperationOnUninitialized {
                    variable: identifier.name.clone(),
                },
                identifier.span.start,
            );
            checker.annotate(assignment.id, TypeInfo::unknown());
        }
        (Some(symbol), None) => {
            let changed = symbol.ty != value.ty || symbol.shape != value.shape;
            if changed && checker.scopes.is_in_conditional() {
                widen(checker, &symbol);
            } else {
                checker
                    .scopes
                    .declare(Symbol::new(&identifier.name, value.ty, value.shape));
            }
        }
        (Some(symbol), Some(operator)) => {
            check_compound_assignment(checker, assignment, &symbol, value, operator);
        }
    }

    if let Some(symbol) = checker.scopes.lookup(&identifier.name).map(TypeInfo::from) {
        checker.annotate(identifier.id, symbol);
    }
}

fn check_compound_assignment(
    checker: &mut TypeChecker,
    assignment: &AssignmentStmt,
    symbol: &Symbol,
    value: TypeInfo,
    operator: Operator,
) {
    let invalid = ErrorImpl::InvalidCompoundAssignment {
        operator: String::from(assignment.operator.symbol()),
        left: symbol.ty.to_string(),
        right: value.ty.to_string(),
    };

    if symbol.ty.is_array() || value.ty.is_array() {
        checker.report(invalid, assignment.span.start);
        checker.annotate(assignment.id, TypeInfo::unknown());
        return;
    }

    let ty = if symbol.ty == ValueType::Unknown || value.ty == ValueType::Unknown {
        ValueType::Unknown
    } else if is_valid(Operands::Binary(symbol.ty, value.ty), operator) {
        arithmetic_result(symbol.ty, value.ty, operator)
    } else {
        checker.report(invalid, assignment.span.start);
        ValueType::Unknown
    };

    checker.scopes.declare(Symbol::new(&symbol.name, ty, None));
}

fn check_condition(checker: &mut TypeChecker, construct: &str, condition: &Expr) {
    let info = check_expr(checker, condition);

    if !matches!(info.ty, ValueType::Boolean | ValueType::Unknown) {
        checker.report(
            ErrorImpl::ConditionNotBoolean {
                construct: String::from(construct),
                found: info.ty.to_string(),
            },
            condition.get_span().start,
        );
    }
}

fn check_for(checker: &mut TypeChecker, for_stmt: &ForStmt) {
    check_range(checker, &for_stmt.range);

    checker.scopes.push(ScopeKind::For);
    checker.scopes.declare(Symbol::new(
        &for_stmt.variable.name,
        ValueType::IntNumber,
        None,
    ));
    checker.annotate(for_stmt.variable.id, TypeInfo::of(ValueType::IntNumber));

    check_stmt(checker, &for_stmt.body);
    checker.scopes.pop();
}

fn check_while(checker: &mut TypeChecker, while_stmt: &WhileStmt) {
    checker.scopes.push(ScopeKind::While);
    check_condition(checker, "while", &while_stmt.condition);
    check_stmt(checker, &while_stmt.body);
    checker.scopes.pop();
}

fn check_if(checker: &mut TypeChecker, if_stmt: &IfStmt) {
    checker.scopes.push(ScopeKind::If);
    check_condition(checker, "if", &if_stmt.condition);
    check_stmt(checker, &if_stmt.then_body);
    if let Some(else_body) = &if_stmt.else_body {
        check_stmt(checker, else_body);
    }
    checker.scopes.pop();
}
