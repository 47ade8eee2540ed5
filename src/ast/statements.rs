use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{ast::Expr, expressions::SymbolExpr};

/// Variable Declaration Statement
///
/// `let <identifier> = <value>;`. The identifier is always present once
/// parsing succeeds; a declaration that failed before its identifier never
/// reaches the program.
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub token: Token,
    pub identifier: SymbolExpr,
    pub value: Expr,
    pub span: Span,
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.value, self.identifier, self.value)
    }
}

/// Return Statement
///
/// The value is absent for a bare `return;`.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
    pub span: Span,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.value, value),
            None => write!(f, "{};", self.token.value),
        }
    }
}

/// Expression Statement
///
/// Wraps a bare expression used in statement position, like `a + b;` on a
/// shell line. Renders as the expression alone.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
    pub span: Span,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
