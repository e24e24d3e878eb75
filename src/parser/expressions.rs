//! Expression parsing implementation
//!
//! One method per precedence level, lowest first:
//!
//! - `parse_expression`: `+` and `-`
//! - `parse_term`: `*` and `/`
//! - `parse_factor`: number literals, variable references, grouping
//!
//! Each level folds left-associatively, wrapping the tree built so far as the
//! left child of every new operator. All parsing methods are implemented as
//! `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point): addition and subtraction
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_term()?);
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse term: multiplication and division
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else {
                break;
            };

            let right = Box::new(self.parse_factor()?);
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse factor: number literal, variable reference, or `( expression )`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        match self.peek_token() {
            Token::Number(value, _) => {
                self.advance();
                Ok(Expr::Number(value, loc))
            }
            Token::Ident(name, _) => {
                self.advance();
                Ok(Expr::Variable(name, loc))
            }
            Token::LParen(_) => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_token(
                    &Token::RParen(self.current_location()),
                    "Expected ')' after expression",
                )?;
                // The grouped expression is returned directly; parentheses
                // have no node kind of their own.
                Ok(expr)
            }
            _ => Err(ParseError {
                message: format!(
                    "Expected number, identifier or '(', found {}",
                    self.peek()
                ),
                location: loc,
            }),
        }
    }
}
