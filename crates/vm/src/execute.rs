//! Main execution loop and opcode dispatch for the RISC VM.

use std::fmt;
use std::io::Write;

use crate::error::RuntimeError;
use crate::machine::Machine;
use risc_common::{Instruction, Line, Opcode, Operand};

/// Where a run stands after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// More instructions to execute.
    Running,
    /// HLT executed.
    Halted,
    /// The instruction pointer left the program.
    Finished,
}

impl Status {
    /// True for both ways a run can end normally.
    pub fn is_done(&self) -> bool {
        !matches!(self, Status::Running)
    }
}

impl<'a, W: Write> Machine<'a, W> {
    /// Execute the program until HLT, the end of the program, or an error.
    pub fn run(&mut self) -> Result<Status, RuntimeError> {
        loop {
            let status = self.step()?;
            if status.is_done() {
                return Ok(status);
            }
        }
    }

    /// Execute at most `max_cycles` steps.
    ///
    /// Returns [`Status::Running`] if the limit was reached first.
    pub fn run_for(&mut self, max_cycles: u64) -> Result<Status, RuntimeError> {
        for _ in 0..max_cycles {
            let status = self.step()?;
            if status.is_done() {
                return Ok(status);
            }
        }
        Ok(Status::Running)
    }

    /// Execute one cycle.
    pub fn step(&mut self) -> Result<Status, RuntimeError> {
        if !self.running {
            return Ok(Status::Halted);
        }

        let Some(line) = self.current_line() else {
            return Ok(Status::Finished);
        };

        match line {
            Line::Blank => {}
            Line::Unknown { mnemonic, .. } => {
                return Err(RuntimeError::UnknownOpcode {
                    at: self.at(),
                    mnemonic: mnemonic.clone(),
                })
            }
            Line::Instr(instr) => self.dispatch(instr)?,
        }

        if !self.running {
            return Ok(Status::Halted);
        }

        self.ip = self.ip.wrapping_add(1);
        if self.current_line().is_some() {
            Ok(Status::Running)
        } else {
            Ok(Status::Finished)
        }
    }

    fn dispatch(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        self.check_arity(instr)?;
        let ops = &instr.operands;

        match instr.opcode {
            // Data movement
            Opcode::Mov => {
                let value = self.resolve(&ops[0])?;
                self.assign(&ops[1], value)?;
            }
            Opcode::Psh => {
                let value = self.resolve(&ops[0])?;
                self.stack.push(value);
            }
            Opcode::Pop => {
                self.stack
                    .pop()
                    .ok_or(RuntimeError::StackUnderflow { at: self.at() })?;
            }

            // Arithmetic
            Opcode::Add => {
                let value = self.resolve(&ops[0])?;
                self.acc = self.acc.wrapping_add(value);
            }
            Opcode::Sub => {
                let value = self.resolve(&ops[0])?;
                self.acc = self.acc.wrapping_sub(value);
            }

            // Output
            Opcode::Chp => {
                let value = self.resolve(&ops[0])?;
                let c = u32::try_from(value)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(RuntimeError::InvalidCharacter {
                        at: self.at(),
                        value,
                    })?;
                self.emit(format_args!("{c}"))?;
            }
            Opcode::Inp => {
                let value = self.resolve(&ops[0])?;
                self.emit(format_args!("{value}"))?;
            }

            // Calls
            Opcode::Cll => {
                let target = self.resolve(&ops[0])?;
                self.call(target);
            }
            Opcode::Ret => self.ret()?,

            // Jumps
            Opcode::Jmp => self.jump(&ops[0], true)?,
            Opcode::Jez => self.jump(&ops[0], self.acc == 0)?,
            Opcode::Jnz => self.jump(&ops[0], self.acc != 0)?,
            Opcode::Jgz => self.jump(&ops[0], self.acc > 0)?,
            Opcode::Jlz => self.jump(&ops[0], self.acc < 0)?,

            Opcode::Hlt => self.running = false,
        }

        Ok(())
    }

    fn check_arity(&self, instr: &Instruction) -> Result<(), RuntimeError> {
        let expected = instr.opcode.arity();
        if instr.operands.len() == expected {
            Ok(())
        } else {
            Err(RuntimeError::WrongOperandCount {
                at: self.at(),
                opcode: instr.opcode.mnemonic(),
                expected,
                found: instr.operands.len(),
            })
        }
    }

    /// Jump so that `target` executes next. The operand is validated even
    /// when the jump is not taken.
    fn jump(&mut self, operand: &Operand, taken: bool) -> Result<(), RuntimeError> {
        let target = operand
            .as_immediate()
            .ok_or_else(|| RuntimeError::NonNumericJump {
                at: self.at(),
                operand: operand.to_string(),
            })?;
        if taken {
            self.ip = target.wrapping_sub(1);
        }
        Ok(())
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) -> Result<(), RuntimeError> {
        self.out
            .write_fmt(args)
            .map_err(|e| RuntimeError::Output {
                at: self.at(),
                message: e.to_string(),
            })
    }
}
