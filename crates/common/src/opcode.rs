//! Opcode definitions for the RISC instruction set.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownOpcode;

/// Identifies the operation to perform.
///
/// Mnemonics are matched case-sensitively, exactly as written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Data movement
    /// Copy `src` into `dst`.
    Mov,
    /// Push `src` onto the stack.
    Psh,
    /// Discard the top of the stack.
    Pop,

    // Arithmetic on ACC
    /// `ACC += src`.
    Add,
    /// `ACC -= src`.
    Sub,

    // Output
    /// Print `src` as a character.
    Chp,
    /// Print `src` as a decimal integer.
    Inp,

    // Calls
    /// Open a frame and transfer control to `src`.
    Cll,
    /// Tear down the current frame and return to the caller.
    Ret,

    // Jumps
    /// Unconditional jump.
    Jmp,
    /// Jump if `ACC == 0`.
    Jez,
    /// Jump if `ACC != 0`.
    Jnz,
    /// Jump if `ACC > 0`.
    Jgz,
    /// Jump if `ACC < 0`.
    Jlz,

    /// Stop execution.
    Hlt,
}

/// All opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 15] = [
    Opcode::Mov,
    Opcode::Psh,
    Opcode::Pop,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Chp,
    Opcode::Inp,
    Opcode::Cll,
    Opcode::Ret,
    Opcode::Jmp,
    Opcode::Jez,
    Opcode::Jnz,
    Opcode::Jgz,
    Opcode::Jlz,
    Opcode::Hlt,
];

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Mov => "MOV",
            Opcode::Psh => "PSH",
            Opcode::Pop => "POP",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Chp => "CHP",
            Opcode::Inp => "INP",
            Opcode::Cll => "CLL",
            Opcode::Ret => "RET",
            Opcode::Jmp => "JMP",
            Opcode::Jez => "JEZ",
            Opcode::Jnz => "JNZ",
            Opcode::Jgz => "JGZ",
            Opcode::Jlz => "JLZ",
            Opcode::Hlt => "HLT",
        }
    }

    /// Number of operands this opcode takes.
    pub fn arity(&self) -> usize {
        match self {
            Opcode::Mov => 2,
            Opcode::Pop | Opcode::Ret | Opcode::Hlt => 0,
            Opcode::Psh
            | Opcode::Add
            | Opcode::Sub
            | Opcode::Chp
            | Opcode::Inp
            | Opcode::Cll
            | Opcode::Jmp
            | Opcode::Jez
            | Opcode::Jnz
            | Opcode::Jgz
            | Opcode::Jlz => 1,
        }
    }
}

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == s)
            .copied()
            .ok_or_else(|| UnknownOpcode(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
