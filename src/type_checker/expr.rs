use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, IdentifierExpr, MatrixInitExpr, NegationExpr, NumberExpr, NumberLiteral,
            RangeExpr, SliceArgument, SliceArgumentKind, SliceExpr, TransposeExpr, VectorExpr,
        },
        types::{Operator, Shape, ValueType},
    },
    errors::errors::ErrorImpl,
};

use super::{
    operations::{is_possible, Operands},
    type_checker::{arithmetic_result, TypeChecker, TypeInfo},
};

fn is_integer_like(ty: ValueType) -> bool {
    matches!(ty, ValueType::IntNumber | ValueType::Unknown)
}

pub fn check_expr(checker: &mut TypeChecker, expr: &Expr) -> TypeInfo {
    let info = match expr {
        Expr::Number(number) => match number.value {
            NumberLiteral::Int(_) => TypeInfo::of(ValueType::IntNumber),
            NumberLiteral::Float(_) => TypeInfo::of(ValueType::Float),
        },
        Expr::String(_) => TypeInfo::of(ValueType::String),
        Expr::Identifier(identifier) => return check_identifier(checker, identifier),
        Expr::Vector(vector) => check_vector(checker, vector),
        Expr::MatrixInit(init) => check_matrix_init(checker, init),
        Expr::Negation(negation) => check_negation(checker, negation),
        Expr::Arithmetic(binary) => check_arithmetic(checker, binary),
        Expr::MatrixArithmetic(binary) => check_matrix_arithmetic(checker, binary),
        Expr::Comparison(binary) => check_comparison(checker, binary),
        Expr::Transpose(transpose) => check_transpose(checker, transpose),
        Expr::Slice(slice) => check_slice(checker, slice),
    };

    checker.annotate(expr.id(), info)
}

/// An undeclared identifier is annotated `Null` and reported here; the
/// parent sees `Unknown` so the mistake is only reported once.
fn check_identifier(checker: &mut TypeChecker, identifier: &IdentifierExpr) -> TypeInfo {
    let symbol = checker.scopes.lookup(&identifier.name).map(TypeInfo::from);

    match symbol {
        Some(info) => checker.annotate(identifier.id, info),
        None => {
            checker.report(
                ErrorImpl::UninitializedVariable {
                    variable: identifier.name.clone(),
                },
                identifier.span.start,
            );
            checker.annotate(identifier.id, TypeInfo::null());
            TypeInfo::unknown()
        }
    }
}

fn check_vector(checker: &mut TypeChecker, vector: &VectorExpr) -> TypeInfo {
    let infos: Vec<TypeInfo> = vector
        .elements
        .iter()
        .map(|element| check_expr(checker, element))
        .collect();

    if infos.is_empty() {
        checker.element_types.insert(vector.id, ValueType::Unknown);
        return TypeInfo::array(ValueType::Vector, Some(Shape::Vector(0)));
    }

    let mut element_type = ValueType::Unknown;
    for info in &infos {
        if info.ty == ValueType::Unknown {
            continue;
        }

        if element_type == ValueType::Unknown {
            element_type = info.ty;
        } else if element_type != info.ty {
            checker.report(
                ErrorImpl::MixedElementTypes {
                    first: element_type.to_string(),
                    second: info.ty.to_string(),
                },
                vector.span.start,
            );
            return TypeInfo::unknown();
        }
    }

    checker.element_types.insert(vector.id, element_type);

    match element_type {
        ValueType::Vector => check_matrix_rows(checker, vector, &infos),
        // Nothing known, or nested deeper than a matrix
        ValueType::Unknown | ValueType::Matrix => TypeInfo::unknown(),
        _ => TypeInfo::array(ValueType::Vector, Some(Shape::Vector(infos.len()))),
    }
}

fn check_matrix_rows(checker: &mut TypeChecker, vector: &VectorExpr, rows: &[TypeInfo]) -> TypeInfo {
    let mut row_size = None;
    for (row, (element, info)) in vector.elements.iter().zip(rows).enumerate() {
        let Some(Shape::Vector(size)) = info.shape else {
            continue;
        };

        match row_size {
            None => row_size = Some(size),
            Some(expected) if expected != size => {
                checker.report(
                    ErrorImpl::MatrixRowSizes {
                        row,
                        size,
                        expected,
                    },
                    element.get_span().start,
                );
                return TypeInfo::unknown();
            }
            Some(_) => {}
        }
    }

    let mut row_type = ValueType::Unknown;
    for element in &vector.elements {
        let Some(&ty) = checker.element_types.get(&element.id()) else {
            continue;
        };
        if ty == ValueType::Unknown {
            continue;
        }

        if row_type == ValueType::Unknown {
            row_type = ty;
        } else if row_type != ty {
            checker.report(
                ErrorImpl::MixedElementTypes {
                    first: row_type.to_string(),
                    second: ty.to_string(),
                },
                element.get_span().start,
            );
            return TypeInfo::unknown();
        }
    }

    match row_size {
        Some(cols) => TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(rows.len(), cols))),
        None => TypeInfo::unknown(),
    }
}

/// `zeros`/`ones`/`eye` only get a static shape from a literal size.
fn check_matrix_init(checker: &mut TypeChecker, init: &MatrixInitExpr) -> TypeInfo {
    let argument = check_expr(checker, &init.argument);

    if !is_integer_like(argument.ty) {
        checker.report(
            ErrorImpl::MatrixSizeNotInteger {
                constructor: String::from(init.kind.name()),
                found: argument.ty.to_string(),
            },
            init.argument.get_span().start,
        );
        return TypeInfo::unknown();
    }

    match &*init.argument {
        Expr::Number(NumberExpr {
            value: NumberLiteral::Int(size),
            ..
        }) if *size >= 0 => {
            let size = *size as usize;
            TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(size, size)))
        }
        _ => TypeInfo::unknown(),
    }
}

pub fn check_range(checker: &mut TypeChecker, range: &RangeExpr) -> TypeInfo {
    let from = check_expr(checker, &range.from);
    let to = check_expr(checker, &range.to);

    if !is_integer_like(from.ty) || !is_integer_like(to.ty) {
        checker.report(
            ErrorImpl::RangeNotInteger {
                from: from.ty.to_string(),
                to: to.ty.to_string(),
            },
            range.span.start,
        );
    }

    checker.annotate(range.id, TypeInfo::of(ValueType::Range))
}

fn check_negation(checker: &mut TypeChecker, negation: &NegationExpr) -> TypeInfo {
    let operand = check_expr(checker, &negation.operand);

    if is_possible(Operands::Unary(operand.ty), Operator::Negate) {
        TypeInfo::of(operand.ty)
    } else {
        checker.report(
            ErrorImpl::InvalidNegation {
                found: operand.ty.to_string(),
            },
            negation.operand.get_span().start,
        );
        TypeInfo::unknown()
    }
}

fn check_arithmetic(checker: &mut TypeChecker, binary: &BinaryExpr) -> TypeInfo {
    let left = check_expr(checker, &binary.left);
    let right = check_expr(checker, &binary.right);

    if !is_possible(Operands::Binary(left.ty, right.ty), binary.operator) {
        checker.report(
            ErrorImpl::InvalidBinaryOperands {
                operator: String::from(binary.operator.symbol()),
                left: left.ty.to_string(),
                right: right.ty.to_string(),
            },
            binary.span.start,
        );
        return TypeInfo::unknown();
    }

    let ty = arithmetic_result(left.ty, right.ty, binary.operator);
    if ty != ValueType::Matrix {
        return TypeInfo::of(ty);
    }

    match (left.shape, right.shape) {
        (Some(Shape::Matrix(rows, inner_left)), Some(Shape::Matrix(inner_right, cols))) => {
            if inner_left == inner_right {
                TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(rows, cols)))
            } else {
                checker.report(
                    ErrorImpl::IncompatibleMatrixMultiplication {
                        left: Shape::Matrix(rows, inner_left).to_string(),
                        right: Shape::Matrix(inner_right, cols).to_string(),
                    },
                    binary.right.get_span().start,
                );
                TypeInfo::unknown()
            }
        }
        // One side is unknown, so the product shape is too
        _ => TypeInfo::unknown(),
    }
}

fn check_matrix_arithmetic(checker: &mut TypeChecker, binary: &BinaryExpr) -> TypeInfo {
    let left = check_expr(checker, &binary.left);
    let right = check_expr(checker, &binary.right);

    if !is_possible(Operands::Binary(left.ty, right.ty), binary.operator) {
        checker.report(
            ErrorImpl::InvalidElementwiseOperands {
                operator: String::from(binary.operator.symbol()),
                left: left.ty.to_string(),
                right: right.ty.to_string(),
            },
            binary.span.start,
        );
        return TypeInfo::unknown();
    }

    if left.ty == ValueType::Unknown || right.ty == ValueType::Unknown {
        return TypeInfo::unknown();
    }

    match (left.shape, right.shape) {
        (Some(left_shape), Some(right_shape)) if left_shape == right_shape => {
            TypeInfo::array(left.ty, Some(left_shape))
        }
        (Some(left_shape), Some(right_shape)) => {
            checker.report(
                ErrorImpl::IncompatibleShapes {
                    operator: String::from(binary.operator.symbol()),
                    left: left_shape.to_string(),
                    right: right_shape.to_string(),
                },
                binary.span.start,
            );
            TypeInfo::unknown()
        }
        _ => TypeInfo::unknown(),
    }
}

fn check_comparison(checker: &mut TypeChecker, binary: &BinaryExpr) -> TypeInfo {
    let left = check_expr(checker, &binary.left);
    let right = check_expr(checker, &binary.right);

    if !is_possible(Operands::Binary(left.ty, right.ty), binary.operator) {
        checker.report(
            ErrorImpl::InvalidComparison {
                operator: String::from(binary.operator.symbol()),
                left: left.ty.to_string(),
                right: right.ty.to_string(),
            },
            binary.span.start,
        );
    }

    TypeInfo::of(ValueType::Boolean)
}

fn check_transpose(checker: &mut TypeChecker, transpose: &TransposeExpr) -> TypeInfo {
    let operand = check_expr(checker, &transpose.operand);

    match operand.ty {
        ValueType::Matrix => TypeInfo::array(ValueType::Matrix, operand.shape.map(|shape| shape.transposed())),
        ValueType::Unknown => TypeInfo::unknown(),
        other => {
            checker.report(
                ErrorImpl::InvalidTransposition {
                    found: other.to_string(),
                },
                transpose.span.start,
            );
            TypeInfo::unknown()
        }
    }
}

/// A slice argument after constant folding. `None` bounds could not be folded.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Selection {
    Index(Option<i64>),
    Range(Option<i64>, Option<i64>),
    Invalid,
}

/// Folds a literal integer, optionally negated once. Anything else is left
/// to the runtime bounds check.
fn fold_constant(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Number(NumberExpr {
            value: NumberLiteral::Int(value),
            ..
        }) => Some(*value),
        Expr::Negation(negation) => match &*negation.operand {
            Expr::Number(NumberExpr {
                value: NumberLiteral::Int(value),
                ..
            }) => Some(-*value),
            _ => None,
        },
        _ => None,
    }
}

fn check_slice_argument(checker: &mut TypeChecker, argument: &SliceArgument) -> Selection {
    match &argument.kind {
        SliceArgumentKind::Index(index) => {
            let info = check_expr(checker, index);
            checker.annotate(argument.id, info);

            if is_integer_like(info.ty) {
                Selection::Index(fold_constant(index))
            } else {
                checker.report(
                    ErrorImpl::InvalidSliceArgument {
                        found: info.ty.to_string(),
                    },
                    index.get_span().start,
                );
                Selection::Invalid
            }
        }
        SliceArgumentKind::Range(range) => {
            let info = check_range(checker, range);
            checker.annotate(argument.id, info);
            Selection::Range(fold_constant(&range.from), fold_constant(&range.to))
        }
    }
}

pub fn check_slice(checker: &mut TypeChecker, slice: &SliceExpr) -> TypeInfo {
    let selections: Vec<Selection> = slice
        .arguments
        .iter()
        .map(|argument| check_slice_argument(checker, argument))
        .collect();

    let name = &slice.identifier.name;
    let Some(symbol) = checker.scopes.lookup(name).cloned() else {
        checker.annotate(slice.identifier.id, TypeInfo::null());
        checker.report(
            ErrorImpl::SliceOfUninitialized {
                variable: name.clone(),
            },
            slice.span.start,
        );
        return TypeInfo::unknown();
    };
    checker.annotate(slice.identifier.id, TypeInfo::from(&symbol));

    match symbol.ty {
        ValueType::String | ValueType::Unknown => return TypeInfo::of(symbol.ty),
        ValueType::Vector | ValueType::Matrix => {}
        other => {
            checker.report(
                ErrorImpl::InvalidSliceSubject {
                    found: other.to_string(),
                },
                slice.span.start,
            );
            return TypeInfo::unknown();
        }
    }

    if selections.len() == 2 && symbol.ty != ValueType::Matrix {
        checker.report(
            ErrorImpl::MatrixSliceOfNonMatrix {
                found: symbol.ty.to_string(),
            },
            slice.span.start,
        );
        return TypeInfo::unknown();
    }

    let Some(shape) = symbol.shape else {
        return TypeInfo::unknown();
    };
    let dimensions = shape.dimensions();

    // Lengths of the axes that survive the slice
    let mut kept = vec![];
    let mut resolved = true;

    for (axis, &size) in dimensions.iter().enumerate() {
        match selections.get(axis).copied() {
            None => kept.push(size),
            Some(Selection::Index(Some(index))) => {
                if index < 0 || index as usize >= size {
                    checker.report(
                        ErrorImpl::IndexOutOfBounds {
                            index: index.to_string(),
                            axis,
                            size,
                            runtime: false,
                        },
                        slice.arguments[axis].span.start,
                    );
                    resolved = false;
                }
            }
            Some(Selection::Range(Some(from), Some(to))) => {
                if from < 0 || to < from || to as usize > size {
                    checker.report(
                        ErrorImpl::IndexOutOfBounds {
                            index: format!("{}:{}", from, to),
                            axis,
                            size,
                            runtime: false,
                        },
                        slice.arguments[axis].span.start,
                    );
                    resolved = false;
                } else {
                    kept.push((to - from) as usize);
                }
            }
            Some(_) => resolved = false,
        }
    }

    if !resolved {
        return TypeInfo::unknown();
    }

    match kept.as_slice() {
        [len] => TypeInfo::array(ValueType::Vector, Some(Shape::Vector(*len))),
        [rows, cols] => TypeInfo::array(ValueType::Matrix, Some(Shape::Matrix(*rows, *cols))),
        // A single element; its scalar type is not tracked
        _ => TypeInfo::unknown(),
    }
}
