//! Program representation: an ordered sequence of lines.
//!
//! Line indices are 0-based and match the source file's line numbers minus
//! one, so jump targets and error locations line up with the text.

use crate::instruction::{Instruction, Line};

/// A loaded program, labels already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The lines, one per source line.
    pub lines: Vec<Line>,
}

impl Program {
    /// Create a new program from a vector of lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Build a program where every line is an instruction.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions.into_iter().map(Line::Instr).collect())
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Number of lines in the program.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of non-blank lines.
    pub fn instruction_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| !matches!(line, Line::Blank))
            .count()
    }
}
