//! Human-readable dumps of the pipeline artifacts
//!
//! Pure formatting functions: nothing here inspects state beyond the value
//! it renders, and nothing prints. Callers decide where the text goes.

use crate::parser::ast::{Expr, Program, Stmt};
use crate::symtab::SymbolTable;

/// Render the AST as an indented tree, depth-first pre-order, two spaces
/// per nesting level.
pub fn ast_to_string(program: &Program) -> String {
    let mut out = String::from("Programa\n");
    for stmt in &program.statements {
        render_stmt(stmt, 1, &mut out);
    }
    out
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn render_stmt(stmt: &Stmt, depth: usize, out: &mut String) {
    push_indent(depth, out);
    match stmt {
        Stmt::Assign { name, expr, .. } => {
            out.push_str(&format!("Asignar(name={})\n", name));
            render_expr(expr, depth + 1, out);
        }
        Stmt::Print { expr, .. } => {
            out.push_str("Imprimir\n");
            render_expr(expr, depth + 1, out);
        }
    }
}

fn render_expr(expr: &Expr, depth: usize, out: &mut String) {
    push_indent(depth, out);
    match expr {
        Expr::Number(value, _) => {
            out.push_str(&format!("Numero({})\n", value));
        }
        Expr::Variable(name, _) => {
            out.push_str(&format!("Variable({})\n", name));
        }
        Expr::Binary {
            op, left, right, ..
        } => {
            out.push_str(&format!("BinOp(op={})\n", op));
            render_expr(left, depth + 1, out);
            render_expr(right, depth + 1, out);
        }
    }
}

/// Render the symbol table, identifiers sorted lexicographically so the
/// output never depends on map iteration order.
pub fn symbol_table_to_string(table: &SymbolTable) -> String {
    let mut lines = vec![String::from("== Tabla de símbolos ==")];

    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (name, info) in entries {
        lines.push(format!(
            "{:<10} tipo={} ocurrencias={}",
            name, info.symbol_type, info.occurrences
        ));
    }

    lines.join("\n") + "\n"
}

/// Render the three-address code listing, one instruction per line in
/// generation order.
pub fn tac_to_string(code: &[String]) -> String {
    let mut lines = vec![String::from("== Código en tres direcciones ==")];

    for instruction in code {
        lines.push(instruction.clone());
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;
    use crate::symtab;
    use crate::tac::TacGenerator;

    fn parse(source: &str) -> Program {
        Parser::new(source).unwrap().parse_program().unwrap()
    }

    #[test]
    fn test_ast_dump() {
        let program = parse("x = 1 + 2 * 3; impr(x)");

        let expected = "\
Programa
  Asignar(name=x)
    BinOp(op=+)
      Numero(1)
      BinOp(op=*)
        Numero(2)
        Numero(3)
  Imprimir
    Variable(x)
";
        assert_eq!(ast_to_string(&program), expected);
    }

    #[test]
    fn test_ast_dump_empty_program() {
        let program = parse("");

        assert_eq!(ast_to_string(&program), "Programa\n");
    }

    #[test]
    fn test_symbol_table_dump_sorted() {
        let program = parse("zeta = 1; alfa = zeta");
        let table = symtab::build(&program);

        let expected = "\
== Tabla de símbolos ==
alfa       tipo=num ocurrencias=1
zeta       tipo=num ocurrencias=2
";
        assert_eq!(symbol_table_to_string(&table), expected);
    }

    #[test]
    fn test_tac_dump() {
        let program = parse("x = 1; impr(x)");
        let code = TacGenerator::new().generate(&program);

        let expected = "\
== Código en tres direcciones ==
t1 = 1
x = t1
impr x
";
        assert_eq!(tac_to_string(&code), expected);
    }
}
