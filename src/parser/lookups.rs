use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        types::Operator,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comparison,
    Additive,
    Multiplicative,
    Unary,
    ElementAdditive,
    ElementMultiplicative,
    Postfix,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Elementwise
    parser.led(TokenKind::DotPlus, BindingPower::ElementAdditive, parse_binary_expr);
    parser.led(TokenKind::DotDash, BindingPower::ElementAdditive, parse_binary_expr);
    parser.led(TokenKind::DotStar, BindingPower::ElementMultiplicative, parse_binary_expr);
    parser.led(TokenKind::DotSlash, BindingPower::ElementMultiplicative, parse_binary_expr);

    parser.led(TokenKind::Apostrophe, BindingPower::Postfix, parse_transpose_expr);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Float, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::OpenBracket, parse_vector_expr);
    parser.nud(TokenKind::Zeros, parse_matrix_init_expr);
    parser.nud(TokenKind::Ones, parse_matrix_init_expr);
    parser.nud(TokenKind::Eye, parse_matrix_init_expr);

    // Statements
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Break, parse_loop_control_stmt);
    parser.stmt(TokenKind::Continue, parse_loop_control_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
}

/// Maps an infix operator token to its operator.
pub fn binary_operator(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Plus => Some(Operator::Add),
        TokenKind::Dash => Some(Operator::Sub),
        TokenKind::Star => Some(Operator::Mul),
        TokenKind::Slash => Some(Operator::Div),
        TokenKind::DotPlus => Some(Operator::ElementAdd),
        TokenKind::DotDash => Some(Operator::ElementSub),
        TokenKind::DotStar => Some(Operator::ElementMul),
        TokenKind::DotSlash => Some(Operator::ElementDiv),
        TokenKind::Equals => Some(Operator::Equal),
        TokenKind::NotEquals => Some(Operator::NotEqual),
        TokenKind::Less => Some(Operator::Less),
        TokenKind::LessEquals => Some(Operator::LessEqual),
        TokenKind::Greater => Some(Operator::Greater),
        TokenKind::GreaterEquals => Some(Operator::GreaterEqual),
        _ => None,
    }
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
