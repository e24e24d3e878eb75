// rustac: teaching compiler front end with three-address code output

use std::fs;
use std::path::Path;

use rustac::parser::parse::Parser;
use rustac::render;
use rustac::symtab;
use rustac::tac::TacGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("rustac");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file>", program_name);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} programa.txt", program_name);
        std::process::exit(1);
    }

    let source_file = &args[1];

    if !Path::new(source_file).exists() {
        eprintln!("Error: File '{}' not found", source_file);
        std::process::exit(1);
    }

    // Read source code
    let source = fs::read_to_string(source_file)?;

    // Parse the source code
    eprintln!("Parsing {}...", source_file);
    let mut parser = match Parser::new(&source) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // The two AST walks are independent of each other
    let table = symtab::build(&program);
    let code = TacGenerator::new().generate(&program);

    print!("{}", render::ast_to_string(&program));
    println!();
    print!("{}", render::symbol_table_to_string(&table));
    println!();
    print!("{}", render::tac_to_string(&code));

    Ok(())
}
