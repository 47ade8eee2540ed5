//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Let declarations and return statements
//! - Identifier, number and boolean expressions
//! - Prefix and binary expressions
//! - Operator precedence via the canonical string rendering
//! - Error accumulation

use crate::{
    ast::ast::{Expr, Program, Stmt},
    lexer::lexer::Lexer,
};

use super::parser::Parser;

fn parse_source(source: &str) -> (Program, Vec<String>) {
    let lexer = Lexer::new(source.to_string(), Some("test.lang".to_string()));
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (program, parser.errors())
}

fn parse_clean(source: &str) -> Program {
    let (program, errors) = parse_source(source);
    assert!(errors.is_empty(), "parser errors for {:?}: {:?}", source, errors);

    program
}

fn unwrap_expression_stmt(stmt: &Stmt) -> &Expr {
    match stmt {
        Stmt::Expression(stmt) => &stmt.expression,
        stmt => panic!("expected expression statement, found {:?}", stmt),
    }
}

#[test]
fn test_parse_var_decl_statements() {
    let program = parse_clean("let x = 7;\nlet y = 11;\nlet someIdentifier = 390123;");

    assert_eq!(program.statements.len(), 3);

    let expected = ["x", "y", "someIdentifier"];

    for (stmt, name) in program.statements.iter().zip(expected) {
        assert_eq!(stmt.token_literal(), "let");

        match stmt {
            Stmt::VarDecl(stmt) => {
                assert_eq!(stmt.identifier.value, name);
                assert_eq!(stmt.identifier.token.value, name);
            }
            stmt => panic!("expected var decl statement, found {:?}", stmt),
        }
    }
}

#[test]
fn test_parse_var_decl_value() {
    let program = parse_clean("let x = 1 + 2;");

    match &program.statements[0] {
        Stmt::VarDecl(stmt) => {
            assert_eq!(stmt.value.to_string(), "(1 + 2)");
        }
        stmt => panic!("expected var decl statement, found {:?}", stmt),
    }
}

#[test]
fn test_parse_return_statements() {
    let program = parse_clean("return 7;\nreturn 11;\nreturn 31234;\nreturn -1;");

    assert_eq!(program.statements.len(), 4);

    for stmt in &program.statements {
        assert_eq!(stmt.token_literal(), "return");

        match stmt {
            Stmt::Return(stmt) => assert!(stmt.value.is_some()),
            stmt => panic!("expected return statement, found {:?}", stmt),
        }
    }
}

#[test]
fn test_parse_bare_return() {
    let program = parse_clean("return;");

    assert_eq!(program.statements.len(), 1);

    match &program.statements[0] {
        Stmt::Return(stmt) => assert!(stmt.value.is_none()),
        stmt => panic!("expected return statement, found {:?}", stmt),
    }
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_clean("someIdentifier;");

    assert_eq!(program.statements.len(), 1);

    let expr = unwrap_expression_stmt(&program.statements[0]);
    match expr {
        Expr::Symbol(expr) => {
            assert_eq!(expr.value, "someIdentifier");
            assert_eq!(expr.token.value, "someIdentifier");
        }
        expr => panic!("expected symbol expression, found {:?}", expr),
    }
}

#[test]
fn test_parse_number_expression() {
    let program = parse_clean("7;");

    let expr = unwrap_expression_stmt(&program.statements[0]);
    match expr {
        Expr::Number(expr) => {
            assert_eq!(expr.value, 7);
            assert_eq!(expr.token.value, "7");
        }
        expr => panic!("expected number expression, found {:?}", expr),
    }

    assert_eq!(program.statements[0].token_literal(), "7");
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, expected) in [("true;", true), ("false;", false)] {
        let program = parse_clean(source);

        let expr = unwrap_expression_stmt(&program.statements[0]);
        match expr {
            Expr::Bool(expr) => assert_eq!(expr.value, expected),
            expr => panic!("expected boolean expression, found {:?}", expr),
        }
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let tests = [("!4;", "!", 4), ("-21;", "-", 21)];

    for (source, operator, value) in tests {
        let program = parse_clean(source);

        assert_eq!(program.statements.len(), 1);

        let expr = unwrap_expression_stmt(&program.statements[0]);
        match expr {
            Expr::Prefix(expr) => {
                assert_eq!(expr.operator.value, operator);

                match expr.right_expr.as_ref() {
                    Expr::Number(right) => assert_eq!(right.value, value),
                    right => panic!("expected number operand, found {:?}", right),
                }
            }
            expr => panic!("expected prefix expression, found {:?}", expr),
        }
    }
}

#[test]
fn test_parse_binary_expressions() {
    let tests = [
        ("4 + 9;", 4, "+", 9),
        ("5 - 6;", 5, "-", 6),
        ("6 * 3;", 6, "*", 3),
        ("10 / 2;", 10, "/", 2),
        ("7 > 8;", 7, ">", 8),
        ("9 < 10;", 9, "<", 10),
        ("2 == 7;", 2, "==", 7),
        ("4 != 4;", 4, "!=", 4),
    ];

    for (source, left, operator, right) in tests {
        let program = parse_clean(source);

        assert_eq!(program.statements.len(), 1);

        let expr = unwrap_expression_stmt(&program.statements[0]);
        match expr {
            Expr::Binary(expr) => {
                assert_eq!(expr.operator.value, operator);

                match expr.left.as_ref() {
                    Expr::Number(number) => assert_eq!(number.value, left),
                    number => panic!("expected number, found {:?}", number),
                }
                match expr.right.as_ref() {
                    Expr::Number(number) => assert_eq!(number.value, right),
                    number => panic!("expected number, found {:?}", number),
                }
            }
            expr => panic!("expected binary expression, found {:?}", expr),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let tests = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("a * b + c", "((a * b) + c)"),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
    ];

    for (source, expected) in tests {
        let program = parse_clean(source);

        assert_eq!(program.to_string(), expected, "for input {:?}", source);
    }
}

#[test]
fn test_optional_trailing_semicolon() {
    let program = parse_clean("a + b");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "(a + b)");
}

#[test]
fn test_parse_var_decl_missing_identifier() {
    let (program, errors) = parse_source("let = 42;");

    // The statement is abandoned, the program is still produced.
    assert!(!errors.is_empty());
    assert!(
        errors[0].contains("expected next token to be Identifier"),
        "unexpected message: {}",
        errors[0]
    );
    assert!(program.statements.len() <= 1);
}

#[test]
fn test_parse_var_decl_missing_assignment() {
    let (_, errors) = parse_source("let x 5;");

    assert!(!errors.is_empty());
    assert!(
        errors[0].contains("expected next token to be Assignment"),
        "unexpected message: {}",
        errors[0]
    );
}

#[test]
fn test_parse_errors_do_not_abort() {
    let (program, errors) = parse_source("let = 1;\nlet y = 8;");

    assert!(!errors.is_empty());

    // The statement after the broken one still parses.
    match program.statements.last() {
        Some(Stmt::VarDecl(stmt)) => assert_eq!(stmt.identifier.value, "y"),
        stmt => panic!("expected trailing var decl statement, found {:?}", stmt),
    }
}

#[test]
fn test_parse_no_prefix_handler() {
    let (program, errors) = parse_source("+;");

    assert_eq!(program.statements.len(), 0);
    assert!(!errors.is_empty());
    assert!(
        errors[0].contains("no prefix parse function for Plus found"),
        "unexpected message: {}",
        errors[0]
    );
}

#[test]
fn test_parse_illegal_token_surfaces_as_error() {
    let (_, errors) = parse_source("@;");

    assert!(!errors.is_empty());
    assert!(
        errors[0].contains("no prefix parse function for Illegal found"),
        "unexpected message: {}",
        errors[0]
    );
}

#[test]
fn test_parse_number_overflow() {
    // One past i64::MAX.
    let (_, errors) = parse_source("9223372036854775808;");

    assert!(!errors.is_empty());
    assert!(
        errors[0].contains("could not parse"),
        "unexpected message: {}",
        errors[0]
    );
}

#[test]
fn test_errors_never_deduplicated() {
    let (_, errors) = parse_source("+ +");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], errors[1]);
}
