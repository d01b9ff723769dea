//! CLI command implementations.

use std::fs;
use std::io::{self, Write};

use crate::params::argv_stack;
use risc_common::Program;
use risc_vm::{Machine, RuntimeError, Status};

/// Exit code for a program that hit `--max-cycles`.
pub const EXIT_CYCLE_LIMIT: i32 = 4;

/// Load and execute a source file.
pub fn run(args: &[String]) -> Result<(), i32> {
    let opts = RunOptions::parse(args)?;
    let text = read_source(&opts.input)?;
    let program = load_program(&text)?;

    let stdout = io::stdout();
    let mut vm = Machine::with_stack(&program, argv_stack(&opts.params), stdout.lock());
    let outcome = drive(&mut vm, &opts);

    vm.into_output().flush().map_err(|e| {
        eprintln!("error: cannot write output: {e}");
        1
    })?;

    match outcome {
        Outcome::Done => Ok(()),
        Outcome::Failed(e) => {
            eprintln!("{}: {e}", e.kind());
            Err(3)
        }
        Outcome::CycleLimit { limit, ip } => {
            eprintln!("error: cycle limit {limit} reached at line {}", ip + 1);
            Err(EXIT_CYCLE_LIMIT)
        }
    }
}

/// Load a source file and report whether its labels resolve.
pub fn check(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: check requires an input file");
        eprintln!("Usage: risc check <input.risc>");
        return Err(1);
    }

    let input = &args[0];
    let text = read_source(input)?;
    let (program, labels) = risc_assembler::load_with_labels(&text).map_err(|e| {
        eprintln!("{}: {e}", e.kind());
        2
    })?;

    println!(
        "OK: {input} ({} instructions, {} labels)",
        program.instruction_count(),
        labels.len()
    );
    Ok(())
}

/// Print the label-resolved program.
pub fn list(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: list requires an input file");
        eprintln!("Usage: risc list <input.risc>");
        return Err(1);
    }

    let input = &args[0];
    let text = read_source(input)?;
    let (program, labels) = risc_assembler::load_with_labels(&text).map_err(|e| {
        eprintln!("{}: {e}", e.kind());
        2
    })?;

    print!("{}", risc_assembler::listing(&program));
    if !labels.is_empty() {
        println!();
        for (name, idx) in labels.sorted() {
            println!("{name} = {idx}");
        }
    }
    Ok(())
}

// --- Helpers ---

/// Options for `risc run`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunOptions {
    input: String,
    trace: bool,
    max_cycles: Option<u64>,
    params: Vec<String>,
}

impl RunOptions {
    /// `<input> [--trace] [--max-cycles N] [--] [params...]`
    ///
    /// Flags are only recognized before the first parameter.
    fn parse(args: &[String]) -> Result<Self, i32> {
        let Some((input, rest)) = args.split_first() else {
            eprintln!("error: run requires an input file");
            eprintln!("Usage: risc run <input.risc> [--trace] [--max-cycles N] [params...]");
            return Err(1);
        };

        let mut opts = RunOptions {
            input: input.clone(),
            trace: false,
            max_cycles: None,
            params: Vec::new(),
        };

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--trace" => opts.trace = true,
                "--max-cycles" => {
                    let Some(value) = rest.get(i + 1) else {
                        eprintln!("error: --max-cycles requires a value");
                        return Err(1);
                    };
                    let limit = value.parse::<u64>().map_err(|_| {
                        eprintln!("error: invalid cycle limit '{value}'");
                        1
                    })?;
                    opts.max_cycles = Some(limit);
                    i += 1;
                }
                "--" => {
                    i += 1;
                    break;
                }
                _ => break,
            }
            i += 1;
        }
        opts.params = rest[i..].to_vec();

        Ok(opts)
    }
}

/// How a run ended.
enum Outcome {
    Done,
    Failed(RuntimeError),
    CycleLimit { limit: u64, ip: i64 },
}

/// Step the VM to completion, tracing and enforcing the cycle limit.
fn drive<W: Write>(vm: &mut Machine<'_, W>, opts: &RunOptions) -> Outcome {
    let mut cycles: u64 = 0;
    loop {
        if let Some(limit) = opts.max_cycles {
            if cycles >= limit {
                return Outcome::CycleLimit { limit, ip: vm.ip() };
            }
        }

        if opts.trace {
            let line = vm.current_line().map(ToString::to_string).unwrap_or_default();
            eprintln!("trace: {} | {line}", vm.snapshot());
        }

        match vm.step() {
            Ok(Status::Running) => cycles += 1,
            Ok(Status::Halted) | Ok(Status::Finished) => return Outcome::Done,
            Err(e) => return Outcome::Failed(e),
        }
    }
}

fn read_source(path: &str) -> Result<String, i32> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })
}

fn load_program(text: &str) -> Result<Program, i32> {
    risc_assembler::load(text).map_err(|e| {
        eprintln!("{}: {e}", e.kind());
        2
    })
}
