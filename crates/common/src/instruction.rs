//! Decoded program lines.

use std::fmt;

use crate::opcode::Opcode;
use crate::operand::Operand;

/// An opcode with its operands.
///
/// The operand count is not checked at construction; the VM rejects a
/// mismatch when the instruction executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Operands in source order.
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, operands: Vec<Operand>) -> Self {
        Self { opcode, operands }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode.mnemonic())?;
        for operand in &self.operands {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}

/// One source line after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// No tokens (empty, comment-only or label-only line). Executes as a no-op.
    Blank,
    /// A recognized instruction.
    Instr(Instruction),
    /// A first token that is not an opcode, with the remaining tokens verbatim.
    Unknown {
        mnemonic: String,
        operands: Vec<String>,
    },
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Blank => Ok(()),
            Line::Instr(instr) => write!(f, "{instr}"),
            Line::Unknown { mnemonic, operands } => {
                f.write_str(mnemonic)?;
                for operand in operands {
                    write!(f, " {operand}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::Register;

    #[test]
    fn display_instruction() {
        let instr = Instruction::new(
            Opcode::Mov,
            vec![
                Operand::Register(Register::Acc),
                Operand::StackIndirect(Box::new(Operand::Immediate(2))),
            ],
        );
        assert_eq!(instr.to_string(), "MOV ACC [2]");
    }

    #[test]
    fn display_lines() {
        assert_eq!(Line::Blank.to_string(), "");
        assert_eq!(
            Line::Instr(Instruction::new(Opcode::Hlt, vec![])).to_string(),
            "HLT"
        );
        assert_eq!(
            Line::Unknown {
                mnemonic: "NOP".to_string(),
                operands: vec!["1".to_string()],
            }
            .to_string(),
            "NOP 1"
        );
    }
}
