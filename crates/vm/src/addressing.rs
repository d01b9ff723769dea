//! Operand addressing: reading and writing through operands.

use std::io::Write;

use crate::error::RuntimeError;
use crate::machine::Machine;
use risc_common::{Operand, Register};

impl<W: Write> Machine<'_, W> {
    /// Resolve an operand to its integer value.
    ///
    /// Stack-indirect operands resolve their inner operand first and use the
    /// result as an absolute stack index, so `[[0]]` reads `stack[stack[0]]`.
    pub(crate) fn resolve(&self, operand: &Operand) -> Result<i64, RuntimeError> {
        match operand {
            Operand::Register(reg) => Ok(self.register(*reg)),
            Operand::Immediate(value) => Ok(*value),
            Operand::StackIndirect(inner) => {
                let index = self.stack_index(inner)?;
                Ok(self.stack[index])
            }
            Operand::Symbol(_) | Operand::Malformed(_) => Err(RuntimeError::InvalidSource {
                at: self.at(),
                operand: operand.to_string(),
            }),
        }
    }

    /// Write `value` through a destination operand.
    ///
    /// Only `ACC`, `BAK` and stack-indirect slots are writable. The stack is
    /// never grown by a write.
    pub(crate) fn assign(&mut self, operand: &Operand, value: i64) -> Result<(), RuntimeError> {
        match operand {
            Operand::Register(Register::Acc) => self.acc = value,
            Operand::Register(Register::Bak) => self.bak = value,
            Operand::StackIndirect(inner) => {
                let index = self.stack_index(inner)?;
                self.stack[index] = value;
            }
            _ => {
                return Err(RuntimeError::InvalidDestination {
                    at: self.at(),
                    operand: operand.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Resolve the inside of a stack-indirect operand to an in-bounds index.
    fn stack_index(&self, inner: &Operand) -> Result<usize, RuntimeError> {
        let index = self.resolve(inner)?;
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.stack.len())
            .ok_or(RuntimeError::IndexOutOfBounds {
                at: self.at(),
                index,
                length: self.stack.len(),
            })
    }
}
