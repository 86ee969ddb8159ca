//! Unit tests for the interpreter.
//!
//! Programs are type checked before they run, exactly as `run_source` does,
//! so every test program here is statically valid unless stated otherwise.

use std::rc::Rc;

use super::{
    interpreter::Interpreter,
    memory::MemoryStack,
    operations::{arithmetic, build_array, compare, elementwise, matrix_init, negate},
    slice::{read, resolve_axes, write, Axis, Selector},
    value::{Matrix, Value},
};
use crate::{
    ast::{expressions::MatrixKind, types::Operator},
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::TypeChecker,
};

/// Runs a program and returns its printed lines together with the result.
fn run(source: &str) -> (String, Result<Option<Value>, Error>) {
    let tokens = tokenize(source.to_string(), Some("test.m".to_string())).unwrap();
    let (_, program) = parse(tokens, Rc::new("test.m".to_string()));
    let program = program.unwrap();

    let mut checker = TypeChecker::new();
    assert!(
        checker.check(&program),
        "program should type check: {:?}",
        checker.diagnostics()
    );

    let mut interpreter = Interpreter::with_output(Vec::new());
    let result = interpreter.run(&program);
    let output = String::from_utf8(interpreter.into_output()).unwrap();
    (output, result)
}

fn output_of(source: &str) -> String {
    let (output, result) = run(source);
    assert!(result.is_ok(), "program failed: {:?}", result);
    output
}

fn runtime_error(source: &str) -> Error {
    run(source).1.unwrap_err()
}

fn matrix(rows: &[&[f64]]) -> Value {
    let rows: Vec<Vec<f64>> = rows.iter().map(|row| row.to_vec()).collect();
    Value::Matrix(Matrix::from_rows(&rows).unwrap())
}

// Values

#[test]
fn test_value_display() {
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::Vector(vec![1.0, 2.5, 3.0]).to_string(), "[1, 2.5, 3]");
    assert_eq!(matrix(&[&[1.0, 2.0], &[3.0, 4.0]]).to_string(), "[[1, 2], [3, 4]]");
    assert_eq!(
        Value::List(vec![Value::from("a"), Value::Int(1)]).to_string(),
        "[a, 1]"
    );
    assert_eq!(Value::Vector(vec![]).to_string(), "[]");
}

#[test]
fn test_matrix_helpers() {
    let identity = Matrix::identity(3).unwrap();
    assert_eq!(identity.get(1, 1), 1.0);
    assert_eq!(identity.get(0, 2), 0.0);

    let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = m.transposed();
    assert_eq!((t.rows, t.cols), (3, 2));
    assert_eq!(t.data, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);

    assert!(Matrix::from_rows(&[vec![1.0], vec![1.0, 2.0]]).is_none());
    assert!(m.multiply(&m).is_none());
}

// Memory

#[test]
fn test_memory_set_updates_owner() {
    let mut memory = MemoryStack::new();
    memory.set("x", Value::Int(1));

    memory.push();
    memory.set("x", Value::Int(2));
    memory.set("y", Value::Int(3));
    memory.pop();

    assert_eq!(memory.get("x"), Some(&Value::Int(2)));
    assert_eq!(memory.get("y"), None);
}

#[test]
fn test_memory_global_frame_survives_pop() {
    let mut memory = MemoryStack::new();
    memory.set("x", Value::Int(1));
    memory.pop();
    memory.pop();

    assert_eq!(memory.depth(), 1);
    assert_eq!(memory.get("x"), Some(&Value::Int(1)));
}

// Operations

#[test]
fn test_integer_arithmetic() {
    assert_eq!(
        arithmetic(Operator::Add, &Value::Int(2), &Value::Int(3)),
        Ok(Value::Int(5))
    );
    assert_eq!(
        arithmetic(Operator::Div, &Value::Int(7), &Value::Int(2)),
        Ok(Value::Float(3.5))
    );
    assert_eq!(
        arithmetic(Operator::Mul, &Value::Int(i64::MAX), &Value::Int(2)),
        Err(ErrorImpl::IntegerOverflow)
    );
    assert_eq!(
        arithmetic(Operator::Div, &Value::Int(1), &Value::Int(0)),
        Err(ErrorImpl::DivisionByZero)
    );
}

#[test]
fn test_mixed_arithmetic() {
    assert_eq!(
        arithmetic(Operator::Sub, &Value::Int(1), &Value::Float(0.5)),
        Ok(Value::Float(0.5))
    );
    assert_eq!(
        arithmetic(Operator::Div, &Value::Float(1.0), &Value::Int(0)),
        Err(ErrorImpl::DivisionByZero)
    );
}

#[test]
fn test_string_arithmetic() {
    assert_eq!(
        arithmetic(Operator::Add, &Value::from("ab"), &Value::from("cd")),
        Ok(Value::from("abcd"))
    );
    assert_eq!(
        arithmetic(Operator::Mul, &Value::from("ab"), &Value::Int(3)),
        Ok(Value::from("ababab"))
    );
    assert_eq!(
        arithmetic(Operator::Mul, &Value::from("ab"), &Value::Int(-1)),
        Ok(Value::from(""))
    );
    assert_eq!(
        arithmetic(Operator::Mul, &Value::from("ab"), &Value::Int(i64::MAX)),
        Err(ErrorImpl::IntegerOverflow)
    );
    assert_eq!(
        arithmetic(Operator::Mul, &Value::from("ab"), &Value::Int(1 << 62)),
        Err(ErrorImpl::IntegerOverflow)
    );
    assert!(matches!(
        arithmetic(Operator::Sub, &Value::from("ab"), &Value::Int(1)),
        Err(ErrorImpl::InvalidOperands { .. })
    ));
}

#[test]
fn test_matrix_multiplication() {
    let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = matrix(&[&[5.0, 6.0], &[7.0, 8.0]]);

    assert_eq!(
        arithmetic(Operator::Mul, &a, &b),
        Ok(matrix(&[&[19.0, 22.0], &[43.0, 50.0]]))
    );

    let c = matrix(&[&[1.0, 2.0, 3.0]]);
    assert!(matches!(
        arithmetic(Operator::Mul, &a, &c),
        Err(ErrorImpl::ShapeMismatch { .. })
    ));
}

#[test]
fn test_elementwise_operations() {
    let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = matrix(&[&[5.0, 6.0], &[7.0, 8.0]]);

    assert_eq!(
        elementwise(Operator::ElementMul, &a, &b),
        Ok(matrix(&[&[5.0, 12.0], &[21.0, 32.0]]))
    );
    assert_eq!(
        elementwise(
            Operator::ElementSub,
            &Value::Vector(vec![3.0, 3.0]),
            &Value::Vector(vec![1.0, 2.0])
        ),
        Ok(Value::Vector(vec![2.0, 1.0]))
    );
    assert!(matches!(
        elementwise(
            Operator::ElementAdd,
            &Value::Vector(vec![1.0]),
            &Value::Vector(vec![1.0, 2.0])
        ),
        Err(ErrorImpl::ShapeMismatch { .. })
    ));
}

#[test]
fn test_elementwise_division_by_zero_is_ieee() {
    let result = elementwise(
        Operator::ElementDiv,
        &Value::Vector(vec![1.0, -1.0]),
        &Value::Vector(vec![0.0, 0.0]),
    );

    assert_eq!(
        result,
        Ok(Value::Vector(vec![f64::INFINITY, f64::NEG_INFINITY]))
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(
        compare(Operator::Less, &Value::Int(1), &Value::Float(1.5)),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        compare(Operator::GreaterEqual, &Value::from("b"), &Value::from("a")),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        compare(Operator::Equal, &Value::from("1"), &Value::Int(1)),
        Ok(Value::Bool(false))
    );
    assert_eq!(
        compare(Operator::NotEqual, &Value::from("1"), &Value::Int(1)),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        compare(Operator::Equal, &Value::Float(f64::NAN), &Value::Float(f64::NAN)),
        Ok(Value::Bool(false))
    );
}

#[test]
fn test_negation() {
    assert_eq!(negate(&Value::Int(3)), Ok(Value::Int(-3)));
    assert_eq!(negate(&Value::Float(1.5)), Ok(Value::Float(-1.5)));
    assert_eq!(negate(&Value::Int(i64::MIN)), Err(ErrorImpl::IntegerOverflow));
    assert!(negate(&Value::Vector(vec![1.0])).is_err());
}

#[test]
fn test_build_array_classification() {
    assert_eq!(
        build_array(vec![Value::Int(1), Value::Float(2.5)]),
        Ok(Value::Vector(vec![1.0, 2.5]))
    );
    assert_eq!(
        build_array(vec![Value::Vector(vec![1.0, 2.0]), Value::Vector(vec![3.0, 4.0])]),
        Ok(matrix(&[&[1.0, 2.0], &[3.0, 4.0]]))
    );
    assert_eq!(
        build_array(vec![Value::from("a"), Value::from("b")]),
        Ok(Value::List(vec![Value::from("a"), Value::from("b")]))
    );
    assert!(build_array(vec![Value::Vector(vec![1.0]), Value::Vector(vec![])]).is_err());
}

#[test]
fn test_matrix_init() {
    assert_eq!(
        matrix_init(MatrixKind::Eye, &Value::Int(2)),
        Ok(matrix(&[&[1.0, 0.0], &[0.0, 1.0]]))
    );
    assert_eq!(
        matrix_init(MatrixKind::Ones, &Value::Int(1)),
        Ok(matrix(&[&[1.0]]))
    );
    assert!(matches!(
        matrix_init(MatrixKind::Zeros, &Value::Int(-1)),
        Err(ErrorImpl::InvalidMatrixSize { .. })
    ));
}

#[test]
fn test_matrix_init_too_large() {
    for size in [1 << 32, 1_000_000_000, i64::MAX] {
        for kind in [MatrixKind::Zeros, MatrixKind::Ones, MatrixKind::Eye] {
            assert!(matches!(
                matrix_init(kind, &Value::Int(size)),
                Err(ErrorImpl::InvalidMatrixSize { .. })
            ));
        }
    }
    assert_eq!(Matrix::filled(1 << 32, 0.0), None);
}

// Slicing

#[test]
fn test_resolve_axes_fills_trailing_axis() {
    let m = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

    assert_eq!(
        resolve_axes(&m, &[Selector::Index(1)]),
        Ok(vec![Axis::At(1), Axis::Span(0, 3)])
    );
    assert!(matches!(
        resolve_axes(&m, &[Selector::Range(0, 3)]),
        Err(ErrorImpl::IndexOutOfBounds { axis: 0, size: 2, runtime: true, .. })
    ));
    assert!(matches!(
        resolve_axes(&Value::Int(1), &[Selector::Index(0)]),
        Err(ErrorImpl::NotSliceable { .. })
    ));
}

#[test]
fn test_read_slices() {
    let m = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

    assert_eq!(
        read(&m, &[Axis::At(1), Axis::Span(0, 3)]),
        Ok(Value::Vector(vec![4.0, 5.0, 6.0]))
    );
    assert_eq!(
        read(&m, &[Axis::Span(0, 2), Axis::At(2)]),
        Ok(Value::Vector(vec![3.0, 6.0]))
    );
    assert_eq!(
        read(&m, &[Axis::Span(0, 2), Axis::Span(1, 3)]),
        Ok(matrix(&[&[2.0, 3.0], &[5.0, 6.0]]))
    );
    assert_eq!(read(&m, &[Axis::At(0), Axis::At(1)]), Ok(Value::Float(2.0)));
    assert_eq!(
        read(&Value::from("hello"), &[Axis::Span(1, 4)]),
        Ok(Value::from("ell"))
    );
}

#[test]
fn test_write_slices() {
    let mut m = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    write(&mut m, &[Axis::At(0), Axis::Span(0, 2)], Value::Vector(vec![9.0, 8.0])).unwrap();
    write(&mut m, &[Axis::At(1), Axis::At(1)], Value::Int(7)).unwrap();
    assert_eq!(m, matrix(&[&[9.0, 8.0], &[3.0, 7.0]]));

    let mut v = Value::Vector(vec![1.0, 2.0, 3.0]);
    write(&mut v, &[Axis::Span(1, 3)], Value::Vector(vec![5.0, 6.0])).unwrap();
    assert_eq!(v, Value::Vector(vec![1.0, 5.0, 6.0]));

    assert!(matches!(
        write(&mut v, &[Axis::Span(0, 2)], Value::Vector(vec![1.0])),
        Err(ErrorImpl::SliceAssignmentMismatch { .. })
    ));

    let mut s = Value::from("hello");
    write(&mut s, &[Axis::At(0)], Value::from("J")).unwrap();
    assert_eq!(s, Value::from("Jello"));
}

// Programs

#[test]
fn test_print_joins_arguments() {
    assert_eq!(output_of("print 1, 2.5, \"a\";"), "1, 2.5, a\n");
}

#[test]
fn test_print_arrays() {
    assert_eq!(output_of("print [1, 2, 3];"), "[1, 2, 3]\n");
    assert_eq!(output_of("print [[1, 2], [3, 4]];"), "[[1, 2], [3, 4]]\n");
    assert_eq!(output_of("print eye(2);"), "[[1, 0], [0, 1]]\n");
}

#[test]
fn test_assignment_and_arithmetic() {
    assert_eq!(output_of("x = 2; y = x * 3 + 1; print y;"), "7\n");
    assert_eq!(output_of("x = 7 / 2; print x;"), "3.5\n");
    assert_eq!(output_of("x = 1; x += 2; x *= 4; print x;"), "12\n");
}

#[test]
fn test_matrix_program() {
    let source = "a = [[1, 2], [3, 4]]; b = [[5, 6], [7, 8]]; print a * b; print a .* b; print a';";
    assert_eq!(
        output_of(source),
        "[[19, 22], [43, 50]]\n[[5, 12], [21, 32]]\n[[1, 3], [2, 4]]\n"
    );
}

#[test]
fn test_for_loop_with_break() {
    assert_eq!(
        output_of("for i = 0:5 { if (i == 3) { break; } print i; }"),
        "0\n1\n2\n"
    );
}

#[test]
fn test_for_loop_with_continue() {
    assert_eq!(
        output_of("for i = 0:4 { if (i == 1) { continue; } print i; }"),
        "0\n2\n3\n"
    );
}

#[test]
fn test_empty_range_does_not_run() {
    assert_eq!(output_of("for i = 3:3 print i; print \"done\";"), "done\n");
}

#[test]
fn test_while_loop() {
    assert_eq!(
        output_of("n = 0; while (n < 3) { n += 1; } print n;"),
        "3\n"
    );
}

#[test]
fn test_loop_local_variables_vanish() {
    // `t` is first bound inside the iteration frame
    let (_, result) = run("for i = 0:2 { t = i; } return 1;");
    assert_eq!(result, Ok(Some(Value::Int(1))));

    assert_eq!(
        output_of("s = 0; for i = 0:4 { s += i; } print s;"),
        "6\n"
    );
}

#[test]
fn test_for_variable_updates_outer_binding() {
    assert_eq!(output_of("i = 10; for i = 0:3 { } print i;"), "2\n");
    assert_eq!(
        output_of("i = [1, 2, 3]; for i = 0:2 { } x = i + 1; print x;"),
        "2\n"
    );
}

#[test]
fn test_if_else() {
    assert_eq!(
        output_of("x = 5; if (x > 3) print \"big\"; else print \"small\";"),
        "big\n"
    );
    assert_eq!(
        output_of("x = 1; if (x > 3) print \"big\"; else print \"small\";"),
        "small\n"
    );
}

#[test]
fn test_return_stops_program() {
    let (output, result) = run("print 1; for i = 0:10 { if (i == 2) { return i; } } print 2;");

    assert_eq!(output, "1\n");
    assert_eq!(result, Ok(Some(Value::Int(2))));
}

#[test]
fn test_return_without_value() {
    let (output, result) = run("return; print 1;");

    assert_eq!(output, "");
    assert_eq!(result, Ok(None));
}

#[test]
fn test_frames_are_popped_after_return() {
    let tokens = tokenize(
        "while (1 < 2) { for i = 0:3 { return i; } }".to_string(),
        None,
    )
    .unwrap();
    let (_, program) = parse(tokens, Rc::new("test.m".to_string()));
    let program = program.unwrap();

    let mut interpreter = Interpreter::with_output(Vec::new());
    assert_eq!(interpreter.run(&program), Ok(Some(Value::Int(0))));
    assert_eq!(interpreter.memory.depth(), 1);
}

#[test]
fn test_slice_reads() {
    assert_eq!(
        output_of("m = [[1, 2, 3], [4, 5, 6]]; print m[1], m[0:2, 1], m[0, 1:3], m[1, 2];"),
        "[4, 5, 6], [2, 5], [2, 3], 6.0\n"
    );
    assert_eq!(output_of("s = \"matrix\"; print s[0:3], s[5];"), "mat, x\n");
}

#[test]
fn test_slice_assignment() {
    assert_eq!(
        output_of("m = zeros(2); m[0, 1] = 5; m[1] = [7, 8]; print m;"),
        "[[0, 5], [7, 8]]\n"
    );
    assert_eq!(
        output_of("v = [1, 2, 3]; v[0:2] = [9, 9]; v[2] += 1; print v;"),
        "[9, 9, 4]\n"
    );
}

#[test]
fn test_slice_assignment_inside_loop_updates_global() {
    assert_eq!(
        output_of("v = [0, 0, 0]; for i = 0:3 { v[i] = i; } print v;"),
        "[0, 1, 2]\n"
    );
}

#[test]
fn test_runtime_index_out_of_bounds() {
    let error = runtime_error("v = [1, 2, 3]; i = 5; print v[i];");

    assert_eq!(error.get_error_name(), "IndexOutOfBounds");
    assert!(error.is_runtime());
    assert_eq!(error.get_position().column, 31);
}

#[test]
fn test_runtime_shape_mismatch() {
    let error = runtime_error("n = 3; a = ones(n); b = eye(2); c = a .+ b;");
    assert_eq!(error.get_error_name(), "ShapeMismatch");

    let error = runtime_error("n = 3; a = ones(n); b = eye(2); c = a * b;");
    assert_eq!(error.get_error_name(), "ShapeMismatch");
}

#[test]
fn test_runtime_division_by_zero() {
    let error = runtime_error("z = 0; x = 1 / z;");
    assert_eq!(*error.get_impl(), ErrorImpl::DivisionByZero);
}

#[test]
fn test_runtime_negative_matrix_size() {
    let error = runtime_error("n = 0 - 2; m = zeros(n);");
    assert_eq!(error.get_error_name(), "InvalidMatrixSize");
}

#[test]
fn test_runtime_oversized_matrix_and_repetition() {
    let error = runtime_error("n = 4294967296; m = zeros(n);");
    assert_eq!(error.get_error_name(), "InvalidMatrixSize");

    let error = runtime_error("s = \"ab\" * 4611686018427387904;");
    assert_eq!(*error.get_impl(), ErrorImpl::IntegerOverflow);
}

#[test]
fn test_output_before_error_is_kept() {
    let (output, result) = run("print \"start\"; z = 0; x = 1 / z; print \"end\";");

    assert_eq!(output, "start\n");
    assert!(result.is_err());
}
