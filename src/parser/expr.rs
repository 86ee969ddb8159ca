use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, IdentifierExpr, MatrixInitExpr, MatrixKind, NegationExpr, NumberExpr,
            NumberLiteral, RangeExpr, SliceArgument, SliceArgumentKind, SliceExpr, StringExpr,
            TransposeExpr, VectorExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{binary_operator, BindingPower},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than `bp`, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected("expected an operator"));
        };
        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let token = parser.advance().clone();
            let value = token.value.parse::<i64>().map_err(|_| {
                Error::new(ErrorImpl::NumberParseError { token: token.value.clone() }, token.span.start)
            })?;

            Ok(Expr::Number(NumberExpr {
                id: parser.advance_id(),
                value: NumberLiteral::Int(value),
                span: token.span,
            }))
        }
        TokenKind::Float => {
            let token = parser.advance().clone();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(ErrorImpl::NumberParseError { token: token.value.clone() }, token.span.start)
            })?;

            Ok(Expr::Number(NumberExpr {
                id: parser.advance_id(),
                value: NumberLiteral::Float(value),
                span: token.span,
            }))
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(Expr::String(StringExpr {
                id: parser.advance_id(),
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            let identifier = IdentifierExpr {
                id: parser.advance_id(),
                name: token.value,
                span: token.span,
            };

            if parser.current_token_kind() == TokenKind::OpenBracket {
                Ok(Expr::Slice(parse_slice_expr(parser, identifier)?))
            } else {
                Ok(Expr::Identifier(identifier))
            }
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let Some(operator) = binary_operator(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken { token: operator_token.value },
            operator_token.span.start,
        ));
    };

    let right = parse_expr(parser, bp)?;

    let binary = BinaryExpr {
        id: parser.advance_id(),
        operator,
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        right: Box::new(right),
    };

    if operator.is_comparison() {
        Ok(Expr::Comparison(binary))
    } else if operator.is_elementwise() {
        Ok(Expr::MatrixArithmetic(binary))
    } else {
        Ok(Expr::Arithmetic(binary))
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Negation(NegationExpr {
        id: parser.advance_id(),
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end,
        },
        operand: Box::new(operand),
    }))
}

pub fn parse_transpose_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let apostrophe = parser.advance().clone();

    Ok(Expr::Transpose(TransposeExpr {
        id: parser.advance_id(),
        span: Span {
            start: left.get_span().start,
            end: apostrophe.span.end,
        },
        operand: Box::new(left),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_vector_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start;

    let mut elements = vec![];
    while parser.current_token_kind() != TokenKind::CloseBracket {
        elements.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    let error = parser.unexpected("expected `,` or `]` in vector literal");
    let end = parser.expect_error(TokenKind::CloseBracket, Some(error))?.span.end;

    Ok(Expr::Vector(VectorExpr {
        id: parser.advance_id(),
        elements,
        span: Span { start, end },
    }))
}

pub fn parse_matrix_init_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();
    let kind = match token.kind {
        TokenKind::Zeros => MatrixKind::Zeros,
        TokenKind::Ones => MatrixKind::Ones,
        _ => MatrixKind::Eye,
    };

    parser.expect(TokenKind::OpenParen)?;
    let argument = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::CloseParen)?.span.end;

    Ok(Expr::MatrixInit(MatrixInitExpr {
        id: parser.advance_id(),
        kind,
        argument: Box::new(argument),
        span: Span {
            start: token.span.start,
            end,
        },
    }))
}

/// Parses `a:b`.
pub fn parse_range_expr(parser: &mut Parser) -> Result<RangeExpr, Error> {
    let from = parse_expr(parser, BindingPower::Default)?;
    finish_range_expr(parser, from)
}

fn finish_range_expr(parser: &mut Parser, from: Expr) -> Result<RangeExpr, Error> {
    let error = parser.unexpected("expected `:` in range");
    parser.expect_error(TokenKind::Colon, Some(error))?;
    let to = parse_expr(parser, BindingPower::Default)?;

    Ok(RangeExpr {
        id: parser.advance_id(),
        span: Span {
            start: from.get_span().start,
            end: to.get_span().end,
        },
        from: Box::new(from),
        to: Box::new(to),
    })
}

fn parse_slice_argument(parser: &mut Parser) -> Result<SliceArgument, Error> {
    let index = parse_expr(parser, BindingPower::Default)?;

    let kind = if parser.current_token_kind() == TokenKind::Colon {
        SliceArgumentKind::Range(finish_range_expr(parser, index)?)
    } else {
        SliceArgumentKind::Index(Box::new(index))
    };

    let span = match &kind {
        SliceArgumentKind::Index(index) => *index.get_span(),
        SliceArgumentKind::Range(range) => range.span,
    };

    Ok(SliceArgument {
        id: parser.advance_id(),
        kind,
        span,
    })
}

/// Parses the bracketed part of `id[a]` or `id[a, b]` once `id` is consumed.
pub fn parse_slice_expr(parser: &mut Parser, identifier: IdentifierExpr) -> Result<SliceExpr, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut arguments = vec![parse_slice_argument(parser)?];
    if parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        arguments.push(parse_slice_argument(parser)?);
    }

    let error = parser.unexpected("expected `]` after at most two slice arguments");
    let end = parser.expect_error(TokenKind::CloseBracket, Some(error))?.span.end;

    Ok(SliceExpr {
        id: parser.advance_id(),
        span: Span {
            start: identifier.span.start,
            end,
        },
        identifier,
        arguments,
    })
}
