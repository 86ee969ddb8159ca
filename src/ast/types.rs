use std::fmt::Display;

/// Static value types.
///
/// `Null` marks an identifier that has not been declared yet and only shows
/// up while resolving a reference. `Unknown` marks a type that could not be
/// determined statically; it never causes an error on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    IntNumber,
    Float,
    String,
    Boolean,
    Range,
    Vector,
    Matrix,
    Null,
    Unknown,
}

impl ValueType {
    pub fn is_array(&self) -> bool {
        matches!(self, ValueType::Vector | ValueType::Matrix)
    }

    pub const CONCRETE: [ValueType; 7] = [
        ValueType::IntNumber,
        ValueType::Float,
        ValueType::String,
        ValueType::Boolean,
        ValueType::Range,
        ValueType::Vector,
        ValueType::Matrix,
    ];
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::IntNumber => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Range => "range",
            ValueType::Vector => "vector",
            ValueType::Matrix => "matrix",
            ValueType::Null => "null",
            ValueType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Dimensions of a vector (length) or matrix (rows, columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Vector(usize),
    Matrix(usize, usize),
}

impl Shape {
    pub fn transposed(&self) -> Shape {
        match *self {
            Shape::Matrix(rows, cols) => Shape::Matrix(cols, rows),
            vector => vector,
        }
    }

    /// Axis lengths in order.
    pub fn dimensions(&self) -> Vec<usize> {
        match *self {
            Shape::Vector(len) => vec![len],
            Shape::Matrix(rows, cols) => vec![rows, cols],
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Vector(len) => write!(f, "({})", len),
            Shape::Matrix(rows, cols) => write!(f, "({}, {})", rows, cols),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Negate,

    Add,
    Sub,
    Mul,
    Div,

    ElementAdd,
    ElementSub,
    ElementMul,
    ElementDiv,

    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub const BINARY: [Operator; 14] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::ElementAdd,
        Operator::ElementSub,
        Operator::ElementMul,
        Operator::ElementDiv,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Negate => "-",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::ElementAdd => ".+",
            Operator::ElementSub => ".-",
            Operator::ElementMul => ".*",
            Operator::ElementDiv => "./",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
        }
    }

    pub fn is_elementwise(&self) -> bool {
        matches!(
            self,
            Operator::ElementAdd | Operator::ElementSub | Operator::ElementMul | Operator::ElementDiv
        )
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Operator::Equal
                | Operator::NotEqual
                | Operator::Less
                | Operator::LessEqual
                | Operator::Greater
                | Operator::GreaterEqual
        )
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
