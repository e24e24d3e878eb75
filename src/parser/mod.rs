//! Mini language source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Grammar
//!
//! ```text
//! programa   -> bloque EOF
//!
//! bloque     -> ( sentencia [';'] )*
//!
//! sentencia  -> ID '=' expresion
//!             | 'impr' '(' expresion ')'
//!
//! expresion  -> termino (('+' | '-') termino)*
//!
//! termino    -> factor (('*' | '/') factor)*
//!
//! factor     -> NUM
//!             | ID
//!             | '(' expresion ')'
//! ```
//!
//! `NUM` is a real-number literal (`3`, `4.5`, `10.0`), `ID` an identifier of
//! letters, digits and `_` not starting with a digit, and `impr` the single
//! reserved word. `;` separates statements; a trailing one is allowed.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence
//! level. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;

mod expressions;
