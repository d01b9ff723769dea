//! RISC loader: source text to a label-resolved program.
//!
//! Each source line becomes exactly one program line, so line indices, jump
//! targets and error locations all agree with the text.
//!
//! # Usage
//!
//! ```
//! use risc_assembler::load;
//!
//! let program = load("loop: PSH 1\nJMP loop\n").unwrap();
//! assert_eq!(program.len(), 2);
//! assert_eq!(program.lines[1].to_string(), "JMP 0");
//! ```
//!
//! # Syntax
//!
//! - `'` starts a comment that runs to end of line.
//! - A first token ending in `:` defines a label for the line it is on.
//! - Every token equal to a label name is replaced by that line's index.

pub mod error;
pub mod labels;

mod disassembler;
mod lexer;
mod parser;

pub use disassembler::{listing, render};
pub use error::LoadError;
pub use labels::LabelTable;

use lexer::tokenize_line;
use parser::parse_line;
use risc_common::Program;

/// Load text into a program.
///
/// Returns the first undefined label encountered.
pub fn load(text: &str) -> Result<Program, LoadError> {
    load_with_labels(text).map(|(program, _)| program)
}

/// Load text into a program, also returning the label table.
pub fn load_with_labels(text: &str) -> Result<(Program, LabelTable), LoadError> {
    let mut lines: Vec<_> = text.lines().map(tokenize_line).collect();
    let labels = LabelTable::collect(&lines);

    let mut program = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter_mut().enumerate() {
        labels.substitute(&mut line.tokens);
        program.push(parse_line(&line.tokens, idx + 1)?);
    }

    Ok((Program::new(program), labels))
}
