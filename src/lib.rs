//! # Introduction
//!
//! rustac is a teaching front end for a tiny imperative expression language:
//! assignments, a print statement, the four arithmetic operators with the
//! usual precedence, parenthesised grouping, and `;` as statement separator.
//! There is no execution engine and no optimizer: the pipeline ends at a
//! linear three-address-code listing.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → { Symbol table, Three-address code }
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an AST.
//! 2. [`symtab`] — walks the AST and records every identifier with an
//!    occurrence count.
//! 3. [`tac`] — walks the AST and emits a linear three-address-code listing
//!    with generator-introduced temporaries.
//! 4. [`render`] — human-readable dumps of the AST, the symbol table and the
//!    TAC listing.
//!
//! The two AST walks are read-only and independent of each other. The first
//! lexical or syntactic error aborts the run; a failed run produces no
//! partial output.
//!
//! ## Supported language
//!
//! One implicit numeric type. No scoping, no control flow, no functions.
//! The single reserved word is `impr`:
//!
//! ```text
//! x = 1;
//! y = x + x * (2 - 0.5);
//! impr(y)
//! ```

pub mod parser;
pub mod render;
pub mod symtab;
pub mod tac;
