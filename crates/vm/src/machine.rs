//! VM state management: registers, stack, instruction pointer, output sink.

use std::fmt;
use std::io::Write;

use risc_common::{Line, Program, Register};

/// The RISC virtual machine.
///
/// Owns its stack and registers for the length of one run. Output from
/// `CHP`/`INP` goes to `out`.
pub struct Machine<'a, W: Write> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// The one and only memory region.
    pub(crate) stack: Vec<i64>,
    /// Accumulator.
    pub(crate) acc: i64,
    /// Backup register.
    pub(crate) bak: i64,
    /// Frame pointer.
    pub(crate) sfp: i64,
    /// Frame base pointer.
    pub(crate) bsp: i64,
    /// Instruction pointer (line index). Signed so that jump arithmetic
    /// can step outside the program, which ends the run.
    pub(crate) ip: i64,
    /// Cleared by HLT.
    pub(crate) running: bool,
    /// Output sink.
    pub(crate) out: W,
}

impl<'a, W: Write> Machine<'a, W> {
    /// Create a new VM with an empty stack.
    pub fn new(program: &'a Program, out: W) -> Self {
        Self::with_stack(program, Vec::new(), out)
    }

    /// Create a new VM whose stack starts with `stack`.
    ///
    /// `SFP` is set to the last seeded slot so that the seeded values sit
    /// below the top-level frame. `BSP` starts at 0.
    pub fn with_stack(program: &'a Program, stack: Vec<i64>, out: W) -> Self {
        let sfp = (stack.len() as i64 - 1).max(0);
        Self {
            program,
            stack,
            acc: 0,
            bak: 0,
            sfp,
            bsp: 0,
            ip: 0,
            running: true,
            out,
        }
    }

    /// Current value of a register.
    pub fn register(&self, reg: Register) -> i64 {
        match reg {
            Register::Acc => self.acc,
            Register::Bak => self.bak,
            Register::Stp => self.stp(),
            Register::Sfp => self.sfp,
            Register::Bsp => self.bsp,
        }
    }

    /// Accumulator.
    pub fn acc(&self) -> i64 {
        self.acc
    }

    /// Backup register.
    pub fn bak(&self) -> i64 {
        self.bak
    }

    /// Index of the top of the stack; `-1` when empty.
    pub fn stp(&self) -> i64 {
        self.stack.len() as i64 - 1
    }

    /// Frame pointer.
    pub fn sfp(&self) -> i64 {
        self.sfp
    }

    /// Frame base pointer.
    pub fn bsp(&self) -> i64 {
        self.bsp
    }

    /// Instruction pointer.
    pub fn ip(&self) -> i64 {
        self.ip
    }

    /// The stack, bottom first.
    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    /// True once HLT has executed.
    pub fn is_halted(&self) -> bool {
        !self.running
    }

    /// The line the instruction pointer refers to, if it is inside the program.
    pub fn current_line(&self) -> Option<&'a Line> {
        let program: &'a Program = self.program;
        usize::try_from(self.ip).ok().and_then(|idx| program.get(idx))
    }

    /// Copy of the registers and stack.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ip: self.ip,
            acc: self.acc,
            bak: self.bak,
            stp: self.stp(),
            sfp: self.sfp,
            bsp: self.bsp,
            stack: self.stack.clone(),
            halted: !self.running,
        }
    }

    /// Consume the VM and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Index of the instruction being executed, for error reports.
    ///
    /// Only meaningful while an instruction is executing, when `ip` is known
    /// to be inside the program.
    pub(crate) fn at(&self) -> usize {
        usize::try_from(self.ip).unwrap_or(0)
    }
}

/// Register and stack state at one point of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub ip: i64,
    pub acc: i64,
    pub bak: i64,
    pub stp: i64,
    pub sfp: i64,
    pub bsp: i64,
    pub stack: Vec<i64>,
    pub halted: bool,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip={} acc={} bak={} stp={} sfp={} bsp={} stack={:?}",
            self.ip, self.acc, self.bak, self.stp, self.sfp, self.bsp, self.stack
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn initial_registers() {
        let program = Program::default();
        let vm = Machine::new(&program, io::sink());
        assert_eq!(vm.acc(), 0);
        assert_eq!(vm.bak(), 0);
        assert_eq!(vm.stp(), -1);
        assert_eq!(vm.sfp(), 0);
        assert_eq!(vm.bsp(), 0);
        assert_eq!(vm.ip(), 0);
        assert!(!vm.is_halted());
    }

    #[test]
    fn seeded_stack_sets_frame_pointer() {
        let program = Program::default();
        let vm = Machine::with_stack(&program, vec![2, 3, 6, 0, 0], io::sink());
        assert_eq!(vm.stp(), 4);
        assert_eq!(vm.sfp(), 4);
        assert_eq!(vm.bsp(), 0);
        assert_eq!(vm.register(Register::Stp), 4);
    }

    #[test]
    fn snapshot_display() {
        let program = Program::default();
        let vm = Machine::with_stack(&program, vec![5, 3], io::sink());
        assert_eq!(
            vm.snapshot().to_string(),
            "ip=0 acc=0 bak=0 stp=1 sfp=1 bsp=0 stack=[5, 3]"
        );
    }

    #[test]
    fn current_line_outside_program() {
        let program = Program::default();
        let vm = Machine::new(&program, io::sink());
        assert!(vm.current_line().is_none());
    }
}
