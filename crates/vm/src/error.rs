//! Runtime errors for the RISC VM.
//!
//! Every error carries the 0-based index of the instruction that raised it
//! (`at`) and displays the 1-based source line.

use risc_common::ErrorKind;
use thiserror::Error;

/// Errors that occur during program execution.
///
/// Any of these aborts the run immediately; the VM never recovers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The line's first token is not an opcode.
    #[error("unknown opcode '{mnemonic}' at line {}", .at + 1)]
    UnknownOpcode { at: usize, mnemonic: String },

    /// The instruction has the wrong number of operands.
    #[error("{opcode} expects {expected} operand(s), found {found} at line {}", .at + 1)]
    WrongOperandCount {
        at: usize,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    /// The operand is not a register, stack-indirect form or literal.
    #[error("'{operand}' is not a valid source value at line {}", .at + 1)]
    InvalidSource { at: usize, operand: String },

    /// CHP was given a value that is not a Unicode scalar value.
    #[error("{value} is not a valid character at line {}", .at + 1)]
    InvalidCharacter { at: usize, value: i64 },

    /// The operand cannot be written to.
    #[error("'{operand}' is not a valid destination at line {}", .at + 1)]
    InvalidDestination { at: usize, operand: String },

    /// A stack-indirect index is outside the stack.
    #[error("stack index {index} out of bounds (length {length}) at line {}", .at + 1)]
    IndexOutOfBounds {
        at: usize,
        index: i64,
        length: usize,
    },

    /// A jump operand is not a literal line index.
    #[error("jump target '{operand}' is not a line number at line {}", .at + 1)]
    NonNumericJump { at: usize, operand: String },

    /// POP on an empty stack.
    #[error("stack underflow at line {}", .at + 1)]
    StackUnderflow { at: usize },

    /// RET with BSP not pointing at three readable linkage slots.
    #[error("no call frame at base {base} (stack length {length}) at line {}", .at + 1)]
    FrameOutOfBounds { at: usize, base: i64, length: usize },

    /// The output sink failed.
    #[error("output failed: {message} at line {}", .at + 1)]
    Output { at: usize, message: String },
}

impl RuntimeError {
    /// Taxonomy classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::UnknownOpcode { .. } | RuntimeError::WrongOperandCount { .. } => {
                ErrorKind::InstructionError
            }
            RuntimeError::InvalidSource { .. } | RuntimeError::InvalidCharacter { .. } => {
                ErrorKind::SourceError
            }
            RuntimeError::InvalidDestination { .. } => ErrorKind::DestError,
            RuntimeError::IndexOutOfBounds { .. } => ErrorKind::IndexError,
            RuntimeError::NonNumericJump { .. } => ErrorKind::TagError,
            RuntimeError::StackUnderflow { .. } | RuntimeError::FrameOutOfBounds { .. } => {
                ErrorKind::StackError
            }
            RuntimeError::Output { .. } => ErrorKind::OutputError,
        }
    }

    /// 0-based index of the failing instruction.
    pub fn at(&self) -> usize {
        match self {
            RuntimeError::UnknownOpcode { at, .. }
            | RuntimeError::WrongOperandCount { at, .. }
            | RuntimeError::InvalidSource { at, .. }
            | RuntimeError::InvalidCharacter { at, .. }
            | RuntimeError::InvalidDestination { at, .. }
            | RuntimeError::IndexOutOfBounds { at, .. }
            | RuntimeError::NonNumericJump { at, .. }
            | RuntimeError::StackUnderflow { at }
            | RuntimeError::FrameOutOfBounds { at, .. }
            | RuntimeError::Output { at, .. } => *at,
        }
    }

    /// 1-based source line of the failing instruction.
    pub fn line(&self) -> usize {
        self.at() + 1
    }
}
