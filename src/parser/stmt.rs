use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::IdentifierExpr,
        statements::{
            AssignOperator, AssignTarget, AssignmentStmt, BlockStmt, ForStmt, IfStmt, LoopControl,
            LoopControlStmt, PrintStmt, ReturnStmt, WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_expr, parse_range_expr, parse_slice_expr},
        lookups::BindingPower,
    },
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    parse_assignment_stmt(parser)
}

/// `target op value;` where target is `id`, `id[a]` or `id[a, b]`.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let error = parser.unexpected("expected a statement");
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;

    let identifier = IdentifierExpr {
        id: parser.advance_id(),
        name: token.value,
        span: token.span,
    };

    let target = if parser.current_token_kind() == TokenKind::OpenBracket {
        AssignTarget::Slice(parse_slice_expr(parser, identifier)?)
    } else {
        AssignTarget::Identifier(identifier)
    };

    let operator = match parser.current_token_kind() {
        TokenKind::Assignment => AssignOperator::Assign,
        TokenKind::PlusEquals => AssignOperator::Add,
        TokenKind::MinusEquals => AssignOperator::Sub,
        TokenKind::StarEquals => AssignOperator::Mul,
        TokenKind::SlashEquals => AssignOperator::Div,
        _ => return Err(parser.unexpected("expected an assignment operator")),
    };
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Assignment(AssignmentStmt {
        id: parser.advance_id(),
        target,
        operator,
        value,
        span: Span {
            start: token.span.start,
            end,
        },
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly && parser.has_tokens() {
        statements.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(Stmt::Block(BlockStmt {
        body: statements,
        id: parser.advance_id(),
        span: Span { start, end },
    }))
}

/// Parses `( condition )` for `if` and `while`.
fn parse_condition(parser: &mut Parser, keyword: &str) -> Result<Expr, Error> {
    let error = parser.unexpected(&format!("expected `(` after `{}`", keyword));
    parser.expect_error(TokenKind::OpenParen, Some(error))?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let condition = parse_condition(parser, "if")?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        id: parser.advance_id(),
        condition,
        then_body: Box::new(then_body),
        else_body,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let condition = parse_condition(parser, "while")?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        id: parser.advance_id(),
        condition,
        body: Box::new(body),
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

/// `for id = a:b statement`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let error = parser.unexpected("expected loop variable after `for`");
    let token = parser.expect_error(TokenKind::Identifier, Some(error))?;
    let variable = IdentifierExpr {
        id: parser.advance_id(),
        name: token.value,
        span: token.span,
    };

    parser.expect(TokenKind::Assignment)?;
    let range = parse_range_expr(parser)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        id: parser.advance_id(),
        variable,
        range,
        body: Box::new(body),
        span: Span {
            start,
            end: parser.previous_end(),
        },
    }))
}

pub fn parse_loop_control_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance().clone();
    let kind = if token.kind == TokenKind::Break {
        LoopControl::Break
    } else {
        LoopControl::Continue
    };

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::LoopControl(LoopControlStmt {
        id: parser.advance_id(),
        kind,
        span: Span {
            start: token.span.start,
            end,
        },
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Return(ReturnStmt {
        id: parser.advance_id(),
        value,
        span: Span { start, end },
    }))
}

/// `print e1, e2, ...;`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let mut arguments = vec![parse_expr(parser, BindingPower::Default)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);
    }

    let end = parser.expect(TokenKind::Semicolon)?.span.end;

    Ok(Stmt::Print(PrintStmt {
        id: parser.advance_id(),
        arguments,
        span: Span { start, end },
    }))
}
