//! RISC CLI: check, list and run assembly programs.
//!
//! Exit codes:
//! - 0: Success (HLT or running past the last line)
//! - 1: Usage or input error
//! - 2: Load error (undefined label)
//! - 3: Runtime error
//! - 4: Cycle limit reached

use std::process;

use risc_cli::commands;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "check" => commands::check(&args[2..]),
        "list" => commands::list(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: risc <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <input.risc> [--trace] [--max-cycles N] [params...]");
    eprintln!("                                Execute a program; params are placed on the stack");
    eprintln!("  check <input.risc>            Load a program and resolve its labels");
    eprintln!("  list <input.risc>             Print the program with labels resolved");
}
