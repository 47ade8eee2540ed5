use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{ExpressionStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Dispatches on the current token kind: registered statement handlers
/// first, everything else parses as an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        let handler = *handler;
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;

    // The trailing semicolon is optional so a bare `a + b` works on a
    // shell line.
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    let span = Span {
        start: token.span.start.clone(),
        end: parser.current_token().span.end.clone(),
    };

    Ok(Stmt::Expression(ExpressionStmt {
        token,
        expression,
        span,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    let identifier_token = parser.expect(TokenKind::Identifier)?;
    let identifier = SymbolExpr {
        value: identifier_token.value.clone(),
        token: identifier_token,
    };

    parser.expect(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    let span = Span {
        start: start_token.span.start.clone(),
        end: parser.current_token().span.end.clone(),
    };

    Ok(Stmt::VarDecl(VarDeclStmt {
        token: start_token,
        identifier,
        value,
        span,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();
    parser.advance();

    let value;
    if parser.current_token_is(TokenKind::Semicolon) {
        value = None;
    } else {
        value = Some(parse_expr(parser, BindingPower::Default)?);

        if parser.peek_token_is(TokenKind::Semicolon) {
            parser.advance();
        }
    }

    let span = Span {
        start: start_token.span.start.clone(),
        end: parser.current_token().span.end.clone(),
    };

    Ok(Stmt::Return(ReturnStmt {
        token: start_token,
        value,
        span,
    }))
}
