//! Unit tests for the type checker.
//!
//! Covers the operator tables, scope handling, inference of types and
//! shapes, widening inside conditionals, slices and loop control.

use std::rc::Rc;

use super::{
    operations::{is_possible, is_valid, Operands},
    scope_manager::{ScopeKind, ScopeManager, Symbol},
    type_checker::{TypeChecker, TypeInfo},
};
use crate::{
    ast::{
        ast::{Program, Stmt},
        statements::AssignTarget,
        types::{Operator, Shape, ValueType},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_source(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some("test.m".to_string())).unwrap();
    let (_, result) = parse(tokens, Rc::new("test.m".to_string()));
    result.unwrap()
}

fn check_source(source: &str) -> (TypeChecker, bool) {
    let program = parse_source(source);
    let mut checker = TypeChecker::new();
    let success = checker.check(&program);
    (checker, success)
}

fn error_names(source: &str) -> Vec<String> {
    let (checker, _) = check_source(source);
    checker
        .diagnostics()
        .iter()
        .map(|error| error.get_error_name().to_string())
        .collect()
}

fn symbol_info(checker: &TypeChecker, name: &str) -> TypeInfo {
    TypeInfo::from(checker.symbol(name).unwrap())
}

/// Annotation of the value assigned by the statement at `index`.
fn assigned_info(source: &str, index: usize) -> TypeInfo {
    let program = parse_source(source);
    let mut checker = TypeChecker::new();
    checker.check(&program);

    match &program.body[index] {
        Stmt::Assignment(assignment) => *checker.annotation(assignment.value.id()).unwrap(),
        other => panic!("expected assignment, found {:?}", other),
    }
}

// Operator tables

#[test]
fn test_numeric_pairs_allow_arithmetic_and_comparison() {
    for left in [ValueType::IntNumber, ValueType::Float] {
        for right in [ValueType::IntNumber, ValueType::Float] {
            for operator in [
                Operator::Add,
                Operator::Sub,
                Operator::Mul,
                Operator::Div,
                Operator::Less,
                Operator::GreaterEqual,
                Operator::Equal,
            ] {
                assert!(is_valid(Operands::Binary(left, right), operator));
            }
            assert!(!is_valid(Operands::Binary(left, right), Operator::ElementAdd));
        }
    }
}

#[test]
fn test_string_operations() {
    let strings = Operands::Binary(ValueType::String, ValueType::String);
    assert!(is_valid(strings, Operator::Add));
    assert!(is_valid(strings, Operator::Less));
    assert!(!is_valid(strings, Operator::Sub));
    assert!(!is_valid(strings, Operator::Mul));

    let repetition = Operands::Binary(ValueType::String, ValueType::IntNumber);
    assert!(is_valid(repetition, Operator::Mul));
    assert!(is_valid(repetition, Operator::Equal));
    assert!(is_valid(repetition, Operator::NotEqual));
    assert!(!is_valid(repetition, Operator::Add));
    assert!(!is_valid(repetition, Operator::Less));
}

#[test]
fn test_array_operations() {
    let vectors = Operands::Binary(ValueType::Vector, ValueType::Vector);
    let matrices = Operands::Binary(ValueType::Matrix, ValueType::Matrix);

    for operator in [
        Operator::ElementAdd,
        Operator::ElementSub,
        Operator::ElementMul,
        Operator::ElementDiv,
    ] {
        assert!(is_valid(vectors, operator));
        assert!(is_valid(matrices, operator));
    }

    assert!(is_valid(matrices, Operator::Mul));
    assert!(!is_valid(vectors, Operator::Mul));
    assert!(!is_valid(matrices, Operator::Add));
    assert!(!is_valid(Operands::Binary(ValueType::Vector, ValueType::Matrix), Operator::ElementAdd));
}

#[test]
fn test_negation_operations() {
    assert!(is_valid(Operands::Unary(ValueType::IntNumber), Operator::Negate));
    assert!(is_valid(Operands::Unary(ValueType::Float), Operator::Negate));
    assert!(is_possible(Operands::Unary(ValueType::Unknown), Operator::Negate));
    assert!(!is_possible(Operands::Unary(ValueType::Vector), Operator::Negate));
    assert!(!is_possible(Operands::Unary(ValueType::Matrix), Operator::Negate));
    assert!(!is_possible(Operands::Unary(ValueType::String), Operator::Negate));
}

#[test]
fn test_possible_operations_with_unknown() {
    assert!(is_possible(
        Operands::Binary(ValueType::IntNumber, ValueType::Unknown),
        Operator::Div
    ));
    assert!(is_possible(
        Operands::Binary(ValueType::Unknown, ValueType::Matrix),
        Operator::Mul
    ));
    assert!(is_possible(
        Operands::Binary(ValueType::String, ValueType::Unknown),
        Operator::Mul
    ));
    assert!(!is_possible(
        Operands::Binary(ValueType::Vector, ValueType::Unknown),
        Operator::Add
    ));

    for operator in Operator::BINARY {
        assert!(is_possible(
            Operands::Binary(ValueType::Unknown, ValueType::Unknown),
            operator
        ));
    }

    // Valid pairs stay possible
    assert!(is_possible(
        Operands::Binary(ValueType::IntNumber, ValueType::Float),
        Operator::Sub
    ));
    assert!(!is_valid(
        Operands::Binary(ValueType::IntNumber, ValueType::Unknown),
        Operator::Add
    ));
}

// Scope manager

#[test]
fn test_scope_lookup_and_pop() {
    let mut scopes = ScopeManager::new();
    scopes.push(ScopeKind::Program);
    scopes.declare(Symbol::new("x", ValueType::IntNumber, None));

    scopes.push(ScopeKind::If);
    scopes.declare(Symbol::new("y", ValueType::Float, None));
    assert_eq!(scopes.lookup("x").unwrap().ty, ValueType::IntNumber);
    assert_eq!(scopes.lookup("y").unwrap().ty, ValueType::Float);

    scopes.pop();
    assert!(scopes.lookup("y").is_none());
    assert!(scopes.lookup("x").is_some());
}

#[test]
fn test_scope_declare_updates_owner() {
    let mut scopes = ScopeManager::new();
    scopes.push(ScopeKind::Program);
    scopes.declare(Symbol::new("x", ValueType::IntNumber, None));

    scopes.push(ScopeKind::For);
    scopes.declare(Symbol::new("x", ValueType::Float, None));
    scopes.pop();

    assert_eq!(scopes.lookup("x").unwrap().ty, ValueType::Float);
    assert_eq!(scopes.depth(), 1);
}

#[test]
fn test_scope_loop_and_conditional_tracking() {
    let mut scopes = ScopeManager::new();
    scopes.push(ScopeKind::Program);
    assert!(!scopes.is_in_loop());
    assert!(!scopes.is_in_conditional());

    scopes.push(ScopeKind::For);
    assert!(scopes.is_in_loop());
    assert!(!scopes.is_in_conditional());

    scopes.push(ScopeKind::If);
    assert!(scopes.is_in_loop());
    assert!(scopes.is_in_conditional());

    scopes.pop();
    scopes.pop();
    scopes.push(ScopeKind::While);
    assert!(scopes.is_in_loop());
    assert!(scopes.is_in_conditional());

    scopes.pop();
    scopes.push(ScopeKind::If);
    assert!(!scopes.is_in_loop());
}

#[test]
fn test_symbol_drops_shape_for_scalars() {
    let symbol = Symbol::new("x", ValueType::IntNumber, Some(Shape::Vector(3)));
    assert_eq!(symbol.shape, None);
}

// Inference

#[test]
fn test_literal_types() {
    let (checker, success) = check_source("a = 1; b = 2.5; c = \"text\"; d = 1 < 2;");

    assert!(success);
    assert_eq!(checker.symbol("a").unwrap().ty, ValueType::IntNumber);
    assert_eq!(checker.symbol("b").unwrap().ty, ValueType::Float);
    assert_eq!(checker.symbol("c").unwrap().ty, ValueType::String);
    assert_eq!(checker.symbol("d").unwrap().ty, ValueType::Boolean);
}

#[test]
fn test_vector_literal_shape() {
    assert_eq!(
        assigned_info("v = [1, 2, 3];", 0),
        TypeInfo::array(ValueType::Vector, Some(Shape::Vector(3)))
    );
}

#[test]
fn test_matrix_literal_shape() {
    assert_eq!(
        assigned_info("m = [[1, 2], [3, 4]];", 0),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(2, 2)))
    );
    assert_eq!(
        assigned_info("m = [[1, 2, 3], [4, 5, 6]];", 0),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(2, 3)))
    );
}

#[test]
fn test_matrix_row_size_mismatch() {
    assert_eq!(error_names("m = [[1, 2], [3]];"), vec!["MatrixRowSizes"]);
}

#[test]
fn test_mixed_element_types() {
    assert_eq!(error_names("v = [1, \"two\"];"), vec!["MixedElementTypes"]);
    assert_eq!(error_names("m = [[1, 2], [1.5, 2.5]];"), vec!["MixedElementTypes"]);
}

#[test]
fn test_unknown_elements_are_ignored() {
    let (checker, success) = check_source("n = 2; z = zeros(n); v = [z, 1];");

    // `z` is unknown, so only `1` decides the element type
    assert!(success);
    assert_eq!(checker.symbol("v").unwrap().ty, ValueType::Vector);
}

#[test]
fn test_matrix_constructors() {
    let (checker, success) = check_source("a = zeros(3); b = eye(2); n = 4; c = ones(n);");

    assert!(success);
    assert_eq!(
        symbol_info(&checker, "a"),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(3, 3)))
    );
    assert_eq!(
        symbol_info(&checker, "b"),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(2, 2)))
    );
    // A computed size abandons static tracking
    assert_eq!(checker.symbol("c").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_matrix_constructor_needs_integer() {
    assert_eq!(error_names("a = zeros(2.5);"), vec!["MatrixSizeNotInteger"]);
    assert_eq!(error_names("a = eye(\"3\");"), vec!["MatrixSizeNotInteger"]);
}

#[test]
fn test_arithmetic_result_types() {
    let (checker, success) = check_source(
        "a = 1 + 2; b = 1 + 2.0; c = 4 / 2; d = \"a\" + \"b\"; e = \"ab\" * 3;",
    );

    assert!(success);
    assert_eq!(checker.symbol("a").unwrap().ty, ValueType::IntNumber);
    assert_eq!(checker.symbol("b").unwrap().ty, ValueType::Float);
    assert_eq!(checker.symbol("c").unwrap().ty, ValueType::Float);
    assert_eq!(checker.symbol("d").unwrap().ty, ValueType::String);
    assert_eq!(checker.symbol("e").unwrap().ty, ValueType::String);
}

#[test]
fn test_invalid_binary_operands() {
    assert_eq!(error_names("x = \"a\" - 1;"), vec!["InvalidBinaryOperands"]);
    assert_eq!(error_names("x = [1, 2] + [3, 4];"), vec!["InvalidBinaryOperands"]);
    assert_eq!(error_names("x = [1, 2] * [3, 4];"), vec!["InvalidBinaryOperands"]);
}

#[test]
fn test_invalid_operand_result_is_unknown() {
    let (checker, success) = check_source("x = \"a\" - 1;");

    assert!(!success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_matrix_multiplication_shape() {
    let (checker, success) =
        check_source("a = [[1, 2, 3], [4, 5, 6]]; b = [[1, 2], [3, 4], [5, 6]]; c = a * b;");

    assert!(success);
    assert_eq!(
        symbol_info(&checker, "c"),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(2, 2)))
    );
}

#[test]
fn test_matrix_multiplication_mismatch() {
    assert_eq!(
        error_names("a = [[1, 2], [3, 4]]; b = [[1, 2, 3]]; c = a * b;"),
        vec!["IncompatibleMatrixMultiplication"]
    );
}

#[test]
fn test_matrix_multiplication_with_unknown_degrades() {
    let (checker, success) = check_source("n = 2; a = eye(2); b = ones(n); c = a * b;");

    assert!(success);
    assert_eq!(checker.symbol("c").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_elementwise_shapes() {
    let (checker, success) = check_source("a = [[1, 2], [3, 4]]; b = a .* a; v = [1, 2] .+ [3, 4];");

    assert!(success);
    assert_eq!(
        symbol_info(&checker, "b"),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(2, 2)))
    );
    assert_eq!(
        symbol_info(&checker, "v"),
        TypeInfo::array(ValueType::Vector, Some(Shape::Vector(2)))
    );
}

#[test]
fn test_elementwise_errors() {
    assert_eq!(error_names("v = [1, 2] .+ [1, 2, 3];"), vec!["IncompatibleShapes"]);
    assert_eq!(error_names("v = 1 .* 2;"), vec!["InvalidElementwiseOperands"]);
    assert_eq!(
        error_names("v = [1, 2] .+ [[1, 2], [3, 4]];"),
        vec!["InvalidElementwiseOperands"]
    );
}

#[test]
fn test_negation() {
    let (checker, success) = check_source("a = -1; b = -2.5;");
    assert!(success);
    assert_eq!(checker.symbol("a").unwrap().ty, ValueType::IntNumber);
    assert_eq!(checker.symbol("b").unwrap().ty, ValueType::Float);

    assert_eq!(error_names("v = -[1, 2];"), vec!["InvalidNegation"]);
    assert_eq!(error_names("s = -\"text\";"), vec!["InvalidNegation"]);
}

#[test]
fn test_transposition() {
    let (checker, success) = check_source("a = [[1, 2, 3], [4, 5, 6]]; b = a';");

    assert!(success);
    assert_eq!(
        symbol_info(&checker, "b"),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(3, 2)))
    );
    assert_eq!(error_names("v = [1, 2]'; "), vec!["InvalidTransposition"]);
}

#[test]
fn test_comparison_is_boolean_even_when_invalid() {
    let (checker, success) = check_source("b = [1, 2] < 3;");

    assert!(!success);
    assert_eq!(checker.diagnostics()[0].get_error_name(), "InvalidComparison");
    assert_eq!(checker.symbol("b").unwrap().ty, ValueType::Boolean);
}

#[test]
fn test_uninitialized_variable() {
    assert_eq!(error_names("x = y + 1;"), vec!["UninitializedVariable"]);
    assert_eq!(error_names("print z;"), vec!["UninitializedVariable"]);
}

#[test]
fn test_compound_assignment_on_uninitialized() {
    assert_eq!(error_names("x += 1;"), vec!["OperationOnUninitialized"]);
}

#[test]
fn test_compound_assignment_types() {
    let (checker, success) = check_source("a = 1; a += 2; b = 1; b += 2.5; c = 4; c /= 2; s = \"x\"; s *= 3;");

    assert!(success);
    assert_eq!(checker.symbol("a").unwrap().ty, ValueType::IntNumber);
    assert_eq!(checker.symbol("b").unwrap().ty, ValueType::Float);
    assert_eq!(checker.symbol("c").unwrap().ty, ValueType::Float);
    assert_eq!(checker.symbol("s").unwrap().ty, ValueType::String);
}

#[test]
fn test_compound_assignment_rejects_arrays() {
    assert_eq!(
        error_names("v = [1, 2]; v += 1;"),
        vec!["InvalidCompoundAssignment"]
    );
    assert_eq!(
        error_names("x = 1; x *= [1, 2];"),
        vec!["InvalidCompoundAssignment"]
    );
}

#[test]
fn test_compound_assignment_invalid_pair() {
    let (checker, success) = check_source("s = \"x\"; s -= 1;");

    assert!(!success);
    assert_eq!(checker.diagnostics()[0].get_error_name(), "InvalidCompoundAssignment");
    assert_eq!(checker.symbol("s").unwrap().ty, ValueType::Unknown);
}

// Widening

#[test]
fn test_reassignment_outside_conditional_overwrites() {
    let (checker, success) = check_source("x = 3; x = 3.5;");

    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Float);
}

#[test]
fn test_reassignment_inside_if_widens() {
    let (checker, success) = check_source("x = 3; if (x > 0) { x = 3.5; }");

    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_reassignment_inside_while_widens() {
    let (checker, success) = check_source("x = 3; while (x < 10) { x = \"done\"; }");

    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_same_type_inside_if_keeps_type() {
    let (checker, success) = check_source("x = 3; if (x > 0) { x = 4; }");

    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::IntNumber);
}

#[test]
fn test_shape_change_inside_if_widens() {
    let (checker, success) = check_source("v = [1, 2]; if (1 < 2) { v = [1, 2, 3]; }");

    assert!(success);
    assert_eq!(checker.symbol("v").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_compound_assignment_inside_conditional_promotes() {
    let (checker, success) = check_source("x = 8; while (x > 1) { x /= 2; }");
    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Float);

    let (checker, success) = check_source("x = 1; if (1 < 2) { x += 1.5; }");
    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Float);
}

#[test]
fn test_for_variable_rebinds_outer_symbol() {
    let (checker, success) = check_source("i = [1, 2, 3]; for i = 0:2 { } x = i + 1;");

    assert!(success);
    assert_eq!(checker.symbol("i").unwrap().ty, ValueType::IntNumber);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::IntNumber);
}

#[test]
fn test_for_body_is_not_conditional() {
    let (checker, success) = check_source("x = 1; for i = 0:3 { x = 2.5; }");

    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Float);
}

#[test]
fn test_if_and_else_share_a_scope() {
    let (checker, success) = check_source("if (1 < 2) { y = 1; } else { z = y + 1; }");

    assert!(success, "{:?}", checker.diagnostics());
    assert!(checker.symbol("y").is_none());
}

#[test]
fn test_variable_declared_in_branch_is_scoped() {
    assert_eq!(
        error_names("if (1 < 2) { y = 1; } print y;"),
        vec!["UninitializedVariable"]
    );
}

// Slices

#[test]
fn test_vector_slices() {
    let (checker, success) = check_source("v = [1, 2, 3, 4]; a = v[1:3]; b = v[0];");

    assert!(success);
    assert_eq!(
        symbol_info(&checker, "a"),
        TypeInfo::array(ValueType::Vector, Some(Shape::Vector(2)))
    );
    assert_eq!(checker.symbol("b").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_matrix_slices() {
    let (checker, success) = check_source(
        "m = [[1, 2, 3], [4, 5, 6]]; row = m[1]; rows = m[0:2]; col = m[0:2, 1]; part = m[1, 0:2]; block = m[0:1, 1:3]; cell = m[1, 2];",
    );

    assert!(success);
    assert_eq!(
        symbol_info(&checker, "row"),
        TypeInfo::array(ValueType::Vector, Some(Shape::Vector(3)))
    );
    assert_eq!(
        symbol_info(&checker, "rows"),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(2, 3)))
    );
    assert_eq!(
        symbol_info(&checker, "col"),
        TypeInfo::array(ValueType::Vector, Some(Shape::Vector(2)))
    );
    assert_eq!(
        symbol_info(&checker, "part"),
        TypeInfo::array(ValueType::Vector, Some(Shape::Vector(2)))
    );
    assert_eq!(
        symbol_info(&checker, "block"),
        TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(1, 2)))
    );
    assert_eq!(checker.symbol("cell").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_static_out_of_bounds() {
    assert_eq!(error_names("v = [1, 2, 3]; x = v[5];"), vec!["IndexOutOfBounds"]);
    assert_eq!(error_names("v = [1, 2, 3]; x = v[-1];"), vec!["IndexOutOfBounds"]);
    assert_eq!(error_names("v = [1, 2, 3]; x = v[1:4];"), vec!["IndexOutOfBounds"]);
    assert_eq!(
        error_names("m = [[1, 2], [3, 4]]; x = m[0, 2];"),
        vec!["IndexOutOfBounds"]
    );
}

#[test]
fn test_computed_index_is_not_checked_statically() {
    let (checker, success) = check_source("v = [1, 2, 3]; i = 5; x = v[i]; y = v[1 + 1];");

    assert!(success);
    assert_eq!(checker.symbol("x").unwrap().ty, ValueType::Unknown);
    assert_eq!(checker.symbol("y").unwrap().ty, ValueType::Unknown);
}

#[test]
fn test_string_slice_keeps_string() {
    let (checker, success) = check_source("s = \"hello\"; t = s[1:3];");

    assert!(success);
    assert_eq!(checker.symbol("t").unwrap().ty, ValueType::String);
}

#[test]
fn test_slice_errors() {
    assert_eq!(error_names("x = w[0];"), vec!["SliceOfUninitialized"]);
    assert_eq!(error_names("n = 3; x = n[0];"), vec!["InvalidSliceSubject"]);
    assert_eq!(
        error_names("v = [1, 2]; x = v[0, 1];"),
        vec!["MatrixSliceOfNonMatrix"]
    );
    assert_eq!(
        error_names("v = [1, 2]; x = v[\"a\"];"),
        vec!["InvalidSliceArgument"]
    );
    assert_eq!(error_names("v = [1, 2]; x = v[0.5:1];"), vec!["RangeNotInteger"]);
}

#[test]
fn test_slice_assignment_mirrors_slice() {
    let program = parse_source("m = zeros(3); m[0:2, 1] = [1, 2];");
    let mut checker = TypeChecker::new();

    assert!(checker.check(&program));
    match &program.body[1] {
        Stmt::Assignment(assignment) => {
            assert!(matches!(assignment.target, AssignTarget::Slice(_)));
            assert_eq!(
                *checker.annotation(assignment.id).unwrap(),
                TypeInfo::array(ValueType::Vector, Some(Shape::Vector(2)))
            );
        }
        other => panic!("expected assignment, found {:?}", other),
    }
}

// Control flow

#[test]
fn test_loop_control_outside_loop() {
    assert_eq!(error_names("break;"), vec!["LoopControlOutsideLoop"]);
    assert_eq!(
        error_names("if (1 < 2) { continue; }"),
        vec!["LoopControlOutsideLoop"]
    );
}

#[test]
fn test_loop_control_inside_loop() {
    let (_, success) = check_source(
        "for i = 0:5 { if (i == 3) { break; } } x = 0; while (x < 3) { x += 1; continue; }",
    );
    assert!(success);
}

#[test]
fn test_for_variable_is_integer() {
    let program = parse_source("for i = 0:3 print i;");
    let mut checker = TypeChecker::new();

    assert!(checker.check(&program));
    match &program.body[0] {
        Stmt::For(for_stmt) => assert_eq!(
            checker.annotation(for_stmt.variable.id).unwrap().ty,
            ValueType::IntNumber
        ),
        other => panic!("expected for, found {:?}", other),
    }
}

#[test]
fn test_range_bounds_must_be_integers() {
    assert_eq!(error_names("for i = 0:2.5 print i;"), vec!["RangeNotInteger"]);
}

#[test]
fn test_condition_must_be_boolean() {
    assert_eq!(error_names("if (1) print 1;"), vec!["ConditionNotBoolean"]);
    assert_eq!(error_names("while (\"yes\") print 1;"), vec!["ConditionNotBoolean"]);
}

#[test]
fn test_all_errors_are_reported() {
    let names = error_names("break; x = y; v = [[1], [1, 2]];");
    assert_eq!(
        names,
        vec!["LoopControlOutsideLoop", "UninitializedVariable", "MatrixRowSizes"]
    );
}

#[test]
fn test_every_node_is_annotated() {
    let program = parse_source("x = 1; print x + 2;");
    let mut checker = TypeChecker::new();
    checker.check(&program);

    assert_eq!(checker.annotation(program.id).unwrap().ty, ValueType::Null);
    match &program.body[1] {
        Stmt::Print(print) => {
            assert_eq!(checker.annotation(print.id).unwrap().ty, ValueType::Null);
            assert_eq!(
                checker.annotation(print.arguments[0].id()).unwrap().ty,
                ValueType::IntNumber
            );
        }
        other => panic!("expected print, found {:?}", other),
    }
}

#[test]
fn test_check_can_run_twice() {
    let program = parse_source("x = 1; break;");
    let mut checker = TypeChecker::new();

    assert!(!checker.check(&program));
    assert!(!checker.check(&program));
    assert_eq!(checker.diagnostics().len(), 1);
}
