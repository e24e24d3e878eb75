//! Three-address code generation
//!
//! Lowers the AST into a linear listing where each instruction computes at
//! most one operation: `<destination> = <value>` or `impr <value>`.
//! Intermediate values live in generator-introduced temporaries `t1, t2, …`.
//!
//! The traversal is read-only over the AST. Evaluation order is strictly
//! left before right, so operand instructions appear in the listing before
//! the instruction that combines them.

use crate::parser::ast::{Expr, Program, Stmt};

/// Three-address code generator.
///
/// The temporary counter and the instruction buffer are instance-local and
/// reset at the start of every [`generate`](TacGenerator::generate) call, so
/// a reused generator behaves exactly like a fresh one.
pub struct TacGenerator {
    temp_count: usize,
    code: Vec<String>,
}

impl TacGenerator {
    pub fn new() -> Self {
        Self {
            temp_count: 0,
            code: Vec::new(),
        }
    }

    /// Generate the instruction listing for a parsed program.
    ///
    /// Statement order in the output matches statement order in the input.
    pub fn generate(&mut self, program: &Program) -> Vec<String> {
        self.temp_count = 0;
        self.code.clear();

        for stmt in &program.statements {
            self.gen_stmt(stmt);
        }

        std::mem::take(&mut self.code)
    }

    /// Allocate the next temporary name
    fn new_temp(&mut self) -> String {
        self.temp_count += 1;
        format!("t{}", self.temp_count)
    }

    fn gen_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assign { name, expr, .. } => {
                let place = self.gen_expr(expr);
                self.code.push(format!("{} = {}", name, place));
            }
            Stmt::Print { expr, .. } => {
                let place = self.gen_expr(expr);
                self.code.push(format!("impr {}", place));
            }
        }
    }

    /// Evaluate an expression and return its place: a temporary name for
    /// literals and operator results, or the bare identifier for a variable
    /// read (which emits no instruction).
    fn gen_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Number(value, _) => {
                let temp = self.new_temp();
                self.code.push(format!("{} = {}", temp, value));
                temp
            }
            Expr::Variable(name, _) => name.clone(),
            Expr::Binary {
                op, left, right, ..
            } => {
                let left_place = self.gen_expr(left);
                let right_place = self.gen_expr(right);
                let temp = self.new_temp();
                self.code.push(format!(
                    "{} = {} {} {}",
                    temp, left_place, op, right_place
                ));
                temp
            }
        }
    }
}

impl Default for TacGenerator {
    fn default() -> Self {
        Self::new()
    }
}
