//! Error taxonomy shared by the loader and the VM.

use std::fmt;

use thiserror::Error;

/// Classification of every failure a program can produce.
///
/// Load errors and runtime errors both map onto this set so a harness can
/// report them uniformly as `<kind>: <message>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operand names a label that was never defined.
    LabelError,
    /// The opcode is not in the dispatch table, or has the wrong operand count.
    InstructionError,
    /// An operand is not a register, stack-indirect form or literal.
    SourceError,
    /// A destination operand is not writable.
    DestError,
    /// A stack-indirect index is outside the current stack.
    IndexError,
    /// A jump operand is not a literal line index.
    TagError,
    /// POP on an empty stack, or RET without a readable frame.
    StackError,
    /// The output sink rejected a write.
    OutputError,
}

impl ErrorKind {
    /// Name used when reporting the error.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::LabelError => "LabelError",
            ErrorKind::InstructionError => "InstructionError",
            ErrorKind::SourceError => "SourceError",
            ErrorKind::DestError => "DestError",
            ErrorKind::IndexError => "IndexError",
            ErrorKind::TagError => "TagError",
            ErrorKind::StackError => "StackError",
            ErrorKind::OutputError => "OutputError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mnemonic that does not name any opcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown opcode '{0}'")]
pub struct UnknownOpcode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(ErrorKind::LabelError.to_string(), "LabelError");
        assert_eq!(ErrorKind::TagError.to_string(), "TagError");
    }

    #[test]
    fn unknown_opcode_display() {
        assert_eq!(
            UnknownOpcode("FOO".to_string()).to_string(),
            "unknown opcode 'FOO'"
        );
    }
}
