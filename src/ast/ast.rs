use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, BoolExpr, NumberExpr, PrefixExpr, SymbolExpr},
    statements::{ExpressionStmt, ReturnStmt, VarDeclStmt},
};

/// Statement kinds
///
/// One variant per concrete statement node. Matching on this enum is
/// exhaustive, so a new statement kind cannot be added without every
/// accessor below learning about it.
#[derive(Debug, Clone)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Returns the literal text of the statement's leading token.
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::VarDecl(stmt) => &stmt.token.value,
            Stmt::Return(stmt) => &stmt.token.value,
            Stmt::Expression(stmt) => &stmt.token.value,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::VarDecl(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression kinds
///
/// Prefix and binary expressions own their operands, so the enum is a
/// tree with no sharing between nodes.
#[derive(Debug, Clone)]
pub enum Expr {
    Number(NumberExpr),
    Bool(BoolExpr),
    Symbol(SymbolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Returns the literal text of the expression's leading token, which
    /// is the operator token for prefix and binary expressions.
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Number(expr) => &expr.token.value,
            Expr::Bool(expr) => &expr.token.value,
            Expr::Symbol(expr) => &expr.token.value,
            Expr::Prefix(expr) => &expr.operator.value,
            Expr::Binary(expr) => &expr.operator.value,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.token.span,
            Expr::Bool(expr) => &expr.token.span,
            Expr::Symbol(expr) => &expr.token.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "{}", expr),
            Expr::Bool(expr) => write!(f, "{}", expr),
            Expr::Symbol(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Binary(expr) => write!(f, "{}", expr),
        }
    }
}

/// Root node. Owns the full tree; the statement list is append-only while
/// parsing and untouched afterwards.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}
