// AST (Abstract Syntax Tree) definitions for the mini language front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// Statement nodes
///
/// The language has exactly two statement forms: assignment and print.
#[derive(Debug, Clone)]
pub enum Stmt {
    Assign {
        name: String,
        expr: Expr,
        location: SourceLocation,
    },
    Print {
        expr: Expr,
        location: SourceLocation,
    },
}

impl Stmt {
    /// Get the source location of this statement
    pub fn location(&self) -> &SourceLocation {
        match self {
            Stmt::Assign { location, .. } => location,
            Stmt::Print { location, .. } => location,
        }
    }
}

/// Expression nodes
///
/// Expressions form a tree: every non-leaf node exclusively owns its
/// children, and nothing mutates a node after the parser builds it.
#[derive(Debug, Clone)]
pub enum Expr {
    Number(f64, SourceLocation),
    Variable(String, SourceLocation),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Get the source location of this expression
    pub fn location(&self) -> &SourceLocation {
        match self {
            Expr::Number(_, loc) => loc,
            Expr::Variable(_, loc) => loc,
            Expr::Binary { location, .. } => location,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
