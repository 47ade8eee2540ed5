use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, BoolExpr, NumberExpr, PrefixExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Classic Pratt loop: the NUD of the current token produces the initial
/// left side, then every peeked operator with a strictly higher binding
/// power absorbs it. The strict comparison is what makes equal-precedence
/// chains left-associative.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixHandler { token: token_kind },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    // While LED and the peeked binding power exceeds bp, continue building lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let token_kind = parser.peek_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(led_fn) => *led_fn,
            None => return Ok(left),
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token().clone();

            match token.value.parse::<i64>() {
                Ok(value) => Ok(Expr::Number(NumberExpr { token, value })),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        }
        TokenKind::Identifier => {
            let token = parser.current_token().clone();

            Ok(Expr::Symbol(SymbolExpr {
                value: token.value.clone(),
                token,
            }))
        }
        TokenKind::True | TokenKind::False => {
            let token = parser.current_token().clone();

            Ok(Expr::Bool(BoolExpr {
                value: token.kind == TokenKind::True,
                token,
            }))
        }
        token_kind => Err(Error::new(
            ErrorImpl::NoPrefixHandler { token: token_kind },
            parser.get_position(),
        )),
    }
}

/// Parses `!` and unary `-`. The operand binds at `Unary`, so `-a * b`
/// comes out as `((-a) * b)`.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.current_token().clone();
    parser.advance();

    let right_expr = parse_expr(parser, BindingPower::Unary)?;

    let span = Span {
        start: operator.span.start.clone(),
        end: right_expr.get_span().end.clone(),
    };

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        right_expr: Box::new(right_expr),
        span,
    }))
}

/// Parses an infix operator with `left` already built. The right side is
/// parsed at the operator's own binding power; combined with the strict
/// comparison in the outer loop this yields left-associative chaining.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    let span = Span {
        start: left.get_span().start.clone(),
        end: right.get_span().end.clone(),
    };

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
