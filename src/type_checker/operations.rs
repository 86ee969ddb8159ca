use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::ast::types::{Operator, ValueType};

/// Operand types an operator is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operands {
    Unary(ValueType),
    Binary(ValueType, ValueType),
}

const ARITHMETIC: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];
const ELEMENTWISE: [Operator; 4] = [
    Operator::ElementAdd,
    Operator::ElementSub,
    Operator::ElementMul,
    Operator::ElementDiv,
];
const COMPARISON: [Operator; 6] = [
    Operator::Equal,
    Operator::NotEqual,
    Operator::Less,
    Operator::LessEqual,
    Operator::Greater,
    Operator::GreaterEqual,
];

pub type OperationTable = HashMap<Operands, HashSet<Operator>>;

lazy_static! {
    /// Operators allowed when every operand type is concretely known.
    pub static ref VALID_OPERATIONS: OperationTable = {
        let mut table: OperationTable = HashMap::new();

        for left in [ValueType::IntNumber, ValueType::Float] {
            for right in [ValueType::IntNumber, ValueType::Float] {
                table.insert(
                    Operands::Binary(left, right),
                    ARITHMETIC.iter().chain(COMPARISON.iter()).copied().collect(),
                );
            }
        }

        table.insert(
            Operands::Binary(ValueType::String, ValueType::String),
            [Operator::Add].iter().chain(COMPARISON.iter()).copied().collect(),
        );
        // Repetition and equality
        table.insert(
            Operands::Binary(ValueType::String, ValueType::IntNumber),
            [Operator::Mul, Operator::Equal, Operator::NotEqual].into_iter().collect(),
        );

        table.insert(
            Operands::Binary(ValueType::Vector, ValueType::Vector),
            ELEMENTWISE.into_iter().collect(),
        );
        table.insert(
            Operands::Binary(ValueType::Matrix, ValueType::Matrix),
            ELEMENTWISE.iter().chain([Operator::Mul].iter()).copied().collect(),
        );

        table.insert(Operands::Unary(ValueType::IntNumber), [Operator::Negate].into_iter().collect());
        table.insert(Operands::Unary(ValueType::Float), [Operator::Negate].into_iter().collect());

        table
    };

    /// `VALID_OPERATIONS` widened with every combination involving `Unknown`.
    ///
    /// A pair with one unknown side allows whatever the known side allows with
    /// some concrete partner; two unknown sides allow every binary operator.
    pub static ref POSSIBLE_OPERATIONS: OperationTable = {
        let mut table = VALID_OPERATIONS.clone();

        for known in ValueType::CONCRETE {
            let mut as_left = HashSet::new();
            let mut as_right = HashSet::new();

            for other in ValueType::CONCRETE {
                if let Some(operators) = VALID_OPERATIONS.get(&Operands::Binary(known, other)) {
                    as_left.extend(operators.iter().copied());
                }
                if let Some(operators) = VALID_OPERATIONS.get(&Operands::Binary(other, known)) {
                    as_right.extend(operators.iter().copied());
                }
            }

            if !as_left.is_empty() {
                table.insert(Operands::Binary(known, ValueType::Unknown), as_left);
            }
            if !as_right.is_empty() {
                table.insert(Operands::Binary(ValueType::Unknown, known), as_right);
            }
        }

        table.insert(
            Operands::Binary(ValueType::Unknown, ValueType::Unknown),
            Operator::BINARY.into_iter().collect(),
        );
        table.insert(Operands::Unary(ValueType::Unknown), [Operator::Negate].into_iter().collect());

        table
    };
}

/// Whether `operator` is legal for concretely known operand types.
pub fn is_valid(operands: Operands, operator: Operator) -> bool {
    VALID_OPERATIONS
        .get(&operands)
        .is_some_and(|operators| operators.contains(&operator))
}

/// Whether `operator` may be legal once unknown operand types are resolved.
pub fn is_possible(operands: Operands, operator: Operator) -> bool {
    POSSIBLE_OPERATIONS
        .get(&operands)
        .is_some_and(|operators| operators.contains(&operator))
}
