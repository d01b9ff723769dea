//! RISC virtual machine: executes loaded programs.
//!
//! The VM is a register machine over a single growable integer stack:
//! - `ACC` and `BAK` general-purpose registers
//! - `STP`, `SFP`, `BSP` read-only stack and frame registers
//! - CLL/RET frames stored inline in the stack
//!
//! # Usage
//!
//! ```
//! use risc_common::{Instruction, Opcode, Operand, Program};
//! use risc_vm::run;
//!
//! let program = Program::from_instructions(vec![
//!     Instruction::new(Opcode::Psh, vec![Operand::Immediate(5)]),
//!     Instruction::new(Opcode::Psh, vec![Operand::Immediate(3)]),
//!     Instruction::new(Opcode::Add, vec![Operand::parse("[0]")]),
//!     Instruction::new(Opcode::Hlt, vec![]),
//! ]);
//!
//! let state = run(&program, std::io::sink()).unwrap();
//! assert_eq!(state.acc, 5);
//! assert_eq!(state.stack, vec![5, 3]);
//! assert!(state.halted);
//! ```

pub mod addressing;
pub mod error;
pub mod execute;
pub mod frame;
pub mod machine;

pub use error::RuntimeError;
pub use execute::Status;
pub use machine::{Machine, Snapshot};

use risc_common::Program;
use std::io::Write;

/// Execute a program to completion and return the final state.
///
/// Running off the end of the program and executing HLT are both normal
/// termination.
///
/// # Errors
///
/// Returns [`RuntimeError`] for the first failing instruction.
pub fn run<W: Write>(program: &Program, out: W) -> Result<Snapshot, RuntimeError> {
    let mut vm = Machine::new(program, out);
    vm.run()?;
    Ok(vm.snapshot())
}
