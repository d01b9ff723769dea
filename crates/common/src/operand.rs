//! Operand decoding.
//!
//! Operands are decoded once at load time. Forms that cannot be executed are
//! kept (as [`Operand::Symbol`] or [`Operand::Malformed`]) rather than rejected,
//! so the failure surfaces only if the instruction is actually reached.

use std::fmt;

use crate::register::Register;

/// A decoded operand token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A named register.
    Register(Register),
    /// A decimal integer literal.
    Immediate(i64),
    /// `[inner]`: resolve `inner`, then use it as an absolute stack index.
    StackIndirect(Box<Operand>),
    /// A bare identifier. At top level this is an undefined label.
    Symbol(String),
    /// Anything else, kept verbatim.
    Malformed(String),
}

impl Operand {
    /// Decode a single whitespace-free token.
    pub fn parse(token: &str) -> Operand {
        if let Some(reg) = Register::from_name(token) {
            return Operand::Register(reg);
        }

        if let Some(inner) = token
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return Operand::StackIndirect(Box::new(Operand::parse(inner)));
        }

        let mut chars = token.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => match token.parse::<i64>() {
                Ok(value) => Operand::Immediate(value),
                Err(_) => Operand::Malformed(token.to_string()),
            },
            Some(c) if c.is_alphabetic() || c == '_' => {
                if chars.all(|c| c.is_alphanumeric() || c == '_') {
                    Operand::Symbol(token.to_string())
                } else {
                    Operand::Malformed(token.to_string())
                }
            }
            _ => Operand::Malformed(token.to_string()),
        }
    }

    /// The literal value, if this operand is an immediate.
    pub fn as_immediate(&self) -> Option<i64> {
        match self {
            Operand::Immediate(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{reg}"),
            Operand::Immediate(value) => write!(f, "{value}"),
            Operand::StackIndirect(inner) => write!(f, "[{inner}]"),
            Operand::Symbol(text) | Operand::Malformed(text) => f.write_str(text),
        }
    }
}
