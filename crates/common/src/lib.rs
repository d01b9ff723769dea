//! RISC common types.
//!
//! This crate provides the data structures shared by the loader and the VM:
//!
//! - [`Opcode`]: the 15 instruction mnemonics
//! - [`Register`]: `ACC`, `BAK`, `STP`, `SFP`, `BSP`
//! - [`Operand`]: register, literal or stack-indirect operand
//! - [`Instruction`] and [`Line`]: one decoded source line
//! - [`Program`]: a sequence of lines
//! - [`ErrorKind`]: the failure taxonomy every error maps onto

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod operand;
pub mod program;
pub mod register;

// Re-export commonly used types at the crate root.
pub use error::{ErrorKind, UnknownOpcode};
pub use instruction::{Instruction, Line};
pub use opcode::Opcode;
pub use operand::Operand;
pub use program::Program;
pub use register::Register;
