//! Machine registers.

use std::fmt;

/// One of the five named registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Accumulator. Target of ADD/SUB and the conditional jumps' test value.
    Acc,
    /// Backup register.
    Bak,
    /// Top-of-stack index, always `stack.len() - 1`. Read-only.
    Stp,
    /// Frame pointer: last linkage slot of the active frame. Read-only.
    Sfp,
    /// Frame base pointer: first linkage slot of the active frame. Read-only.
    Bsp,
}

/// All registers, in definition order.
pub const ALL_REGISTERS: [Register; 5] = [
    Register::Acc,
    Register::Bak,
    Register::Stp,
    Register::Sfp,
    Register::Bsp,
];

impl Register {
    /// Source-text name of the register.
    pub fn name(&self) -> &'static str {
        match self {
            Register::Acc => "ACC",
            Register::Bak => "BAK",
            Register::Stp => "STP",
            Register::Sfp => "SFP",
            Register::Bsp => "BSP",
        }
    }

    /// Exact, case-sensitive name lookup.
    pub fn from_name(name: &str) -> Option<Register> {
        ALL_REGISTERS.iter().find(|r| r.name() == name).copied()
    }

    /// Only ACC and BAK may be written by instructions.
    pub fn is_writable(&self) -> bool {
        matches!(self, Register::Acc | Register::Bak)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup() {
        for reg in ALL_REGISTERS {
            assert_eq!(Register::from_name(reg.name()), Some(reg));
        }
        assert_eq!(Register::from_name("acc"), None);
        assert_eq!(Register::from_name("STK"), None);
    }

    #[test]
    fn writable_registers() {
        let writable: Vec<_> = ALL_REGISTERS.iter().filter(|r| r.is_writable()).collect();
        assert_eq!(writable, vec![&Register::Acc, &Register::Bak]);
    }
}
