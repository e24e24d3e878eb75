//! Symbol table construction
//!
//! A single depth-first pass over the AST records every identifier the
//! program mentions, whether as an assignment target or as a read, together
//! with how often it occurs. The traversal is read-only: it borrows the
//! [`Program`] and never mutates it.
//!
//! There are no error conditions here: any identifier the parser accepted
//! is valid, and the language has exactly one type.

use crate::parser::ast::{Expr, Program, Stmt};
use rustc_hash::FxHashMap;
use std::fmt;

/// Declared type of a symbol. The language has a single numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    Num,
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolType::Num => write!(f, "num"),
        }
    }
}

/// Bookkeeping entry for one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    pub symbol_type: SymbolType,
    pub occurrences: usize,
}

/// Identifier name → entry. Keys are exactly the identifier spellings
/// appearing anywhere in the program.
pub type SymbolTable = FxHashMap<String, SymbolInfo>;

/// Build the symbol table for a parsed program.
///
/// Statements are visited in source order; an assignment registers its
/// target name before its right-hand expression is visited. Every AST site
/// naming an identifier contributes exactly one occurrence, so repeated
/// builds over the same AST yield identical tables.
pub fn build(program: &Program) -> SymbolTable {
    let mut table = SymbolTable::default();

    for stmt in &program.statements {
        visit_stmt(stmt, &mut table);
    }

    table
}

fn visit_stmt(stmt: &Stmt, table: &mut SymbolTable) {
    match stmt {
        Stmt::Assign { name, expr, .. } => {
            record(name, table);
            visit_expr(expr, table);
        }
        Stmt::Print { expr, .. } => visit_expr(expr, table),
    }
}

fn visit_expr(expr: &Expr, table: &mut SymbolTable) {
    match expr {
        Expr::Number(_, _) => {}
        Expr::Variable(name, _) => record(name, table),
        Expr::Binary { left, right, .. } => {
            visit_expr(left, table);
            visit_expr(right, table);
        }
    }
}

fn record(name: &str, table: &mut SymbolTable) {
    let info = table.entry(name.to_string()).or_insert(SymbolInfo {
        symbol_type: SymbolType::Num,
        occurrences: 0,
    });
    info.occurrences += 1;
}
