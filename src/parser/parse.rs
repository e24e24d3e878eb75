//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure, including error types, helper methods, and the main parse
//! entry point. Expression parsing lives in `expressions` as additional
//! `impl Parser` blocks sharing the same parser state.
//!
//! # Parsing strategy
//!
//! Hand-written recursive descent with one method per grammar rule. The first
//! violated expectation aborts the parse: there is no error recovery and no
//! partial AST is returned.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use std::fmt;

/// Parser error type
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for the mini language
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the entire program: a block of statements followed by end of input
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        // The block ends at the first token that cannot start a statement;
        // at most one separator is consumed after each statement, so a
        // trailing ';' is permitted but never required.
        while self.at_statement_start() {
            program.statements.push(self.parse_statement()?);
            self.match_token(&Token::Semicolon(self.current_location()));
        }

        if !self.is_at_end() {
            return Err(ParseError {
                message: format!(
                    "Expected end of input, found {}",
                    self.peek()
                ),
                location: self.current_location(),
            });
        }

        Ok(program)
    }

    /// Parse a statement: assignment or print
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Impr(loc)) {
            self.expect_token(
                &Token::LParen(self.current_location()),
                "Expected '(' after 'impr'",
            )?;
            let expr = self.parse_expression()?;
            self.expect_token(
                &Token::RParen(self.current_location()),
                "Expected ')' after expression",
            )?;
            return Ok(Stmt::Print {
                expr,
                location: loc,
            });
        }

        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            self.expect_token(
                &Token::Eq(self.current_location()),
                "Expected '=' after identifier",
            )?;
            let expr = self.parse_expression()?;
            return Ok(Stmt::Assign {
                name,
                expr,
                location: loc,
            });
        }

        Err(ParseError {
            message: format!("Expected statement, found {}", self.peek()),
            location: loc,
        })
    }

    // ===== Helper methods =====

    pub(crate) fn at_statement_start(&self) -> bool {
        matches!(self.peek_token(), Token::Ident(_, _) | Token::Impr(_))
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
        {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        let mut parser = Parser::new("x = 1 + 2").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::Assign { name, expr, .. } => {
                assert_eq!(name, "x");
                assert!(matches!(
                    expr,
                    Expr::Binary {
                        op: BinOp::Add,
                        ..
                    }
                ));
            }
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_parse_print() {
        let mut parser = Parser::new("impr(y)").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::Print { expr, .. } => {
                assert!(matches!(expr, Expr::Variable(ref s, _) if s == "y"));
            }
            _ => panic!("Expected print statement"),
        }
    }

    #[test]
    fn test_precedence() {
        let mut parser = Parser::new("x = 1 + 2 * 3").unwrap();
        let program = parser.parse_program().unwrap();

        // `*` binds tighter: 1 + (2 * 3)
        match &program.statements[0] {
            Stmt::Assign { expr, .. } => match expr {
                Expr::Binary {
                    op: BinOp::Add,
                    left,
                    right,
                    ..
                } => {
                    assert!(matches!(**left, Expr::Number(n, _) if n == 1.0));
                    assert!(matches!(
                        **right,
                        Expr::Binary {
                            op: BinOp::Mul,
                            ..
                        }
                    ));
                }
                _ => panic!("Expected addition at the root"),
            },
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_left_associativity() {
        let mut parser = Parser::new("x = a - b - c").unwrap();
        let program = parser.parse_program().unwrap();

        // (a - b) - c, not a - (b - c)
        match &program.statements[0] {
            Stmt::Assign { expr, .. } => match expr {
                Expr::Binary {
                    op: BinOp::Sub,
                    left,
                    right,
                    ..
                } => {
                    assert!(matches!(
                        **left,
                        Expr::Binary {
                            op: BinOp::Sub,
                            ..
                        }
                    ));
                    assert!(
                        matches!(**right, Expr::Variable(ref s, _) if s == "c")
                    );
                }
                _ => panic!("Expected subtraction at the root"),
            },
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_parenthesized_grouping() {
        let mut parser = Parser::new("x = (1 + 2) * 3").unwrap();
        let program = parser.parse_program().unwrap();

        // Parentheses reshape the tree without introducing a node kind
        match &program.statements[0] {
            Stmt::Assign { expr, .. } => match expr {
                Expr::Binary {
                    op: BinOp::Mul,
                    left,
                    ..
                } => {
                    assert!(matches!(
                        **left,
                        Expr::Binary {
                            op: BinOp::Add,
                            ..
                        }
                    ));
                }
                _ => panic!("Expected multiplication at the root"),
            },
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_separators_and_multiple_statements() {
        let mut parser = Parser::new("x = 1; y = x + x; impr(y);").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.statements.len(), 3);
    }

    #[test]
    fn test_statements_without_separator() {
        let mut parser = Parser::new("x = 1 y = 2").unwrap();
        let program = parser.parse_program().unwrap();

        // The separator is optional between statements
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_empty_program() {
        let mut parser = Parser::new("").unwrap();
        let program = parser.parse_program().unwrap();

        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_statement_location() {
        let mut parser = Parser::new("x = 1\nimpr(x)").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(
            *program.statements[0].location(),
            SourceLocation::new(1, 1)
        );
        assert_eq!(
            *program.statements[1].location(),
            SourceLocation::new(2, 1)
        );

        match &program.statements[0] {
            Stmt::Assign { expr, .. } => {
                assert_eq!(*expr.location(), SourceLocation::new(1, 5));
            }
            _ => panic!("Expected assignment"),
        }
    }

    #[test]
    fn test_missing_factor() {
        let mut parser = Parser::new("x = ;").unwrap();
        let err = parser.parse_program().unwrap_err();

        // The separator is the unexpected factor
        assert_eq!(err.location, SourceLocation::new(1, 5));
    }

    #[test]
    fn test_trailing_input() {
        let mut parser = Parser::new("x = 1 )").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected end of input"));
        assert_eq!(err.location, SourceLocation::new(1, 7));
    }

    #[test]
    fn test_missing_rparen_in_print() {
        let mut parser = Parser::new("impr(x").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected ')'"));
    }

    #[test]
    fn test_missing_eq_in_assignment() {
        let mut parser = Parser::new("x 1").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected '='"));
        assert_eq!(err.location, SourceLocation::new(1, 3));
    }

    #[test]
    fn test_lex_error_propagates() {
        let err = Parser::new("x = @").err().expect("Expected a lex error");

        assert!(err.message.contains('@'));
        assert_eq!(err.location, SourceLocation::new(1, 5));
    }
}
