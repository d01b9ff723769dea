//! Decoding of label-resolved tokens into program lines.

use crate::error::LoadError;
use risc_common::{Instruction, Line, Opcode, Operand};

/// Decode the tokens of a single line.
///
/// Unknown mnemonics are preserved verbatim as [`Line::Unknown`], operands
/// undecoded; the VM reports them if they are reached. On a known opcode, a
/// top-level operand that is still a bare identifier after label
/// substitution is an undefined label and fails the load.
pub(crate) fn parse_line(tokens: &[String], line_num: usize) -> Result<Line, LoadError> {
    let Some((mnemonic, args)) = tokens.split_first() else {
        return Ok(Line::Blank);
    };

    let Ok(opcode) = mnemonic.parse::<Opcode>() else {
        return Ok(Line::Unknown {
            mnemonic: mnemonic.clone(),
            operands: args.to_vec(),
        });
    };

    let operands = args
        .iter()
        .map(|token| parse_operand(token, line_num))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Line::Instr(Instruction::new(opcode, operands)))
}

fn parse_operand(token: &str, line_num: usize) -> Result<Operand, LoadError> {
    match Operand::parse(token) {
        Operand::Symbol(name) => Err(LoadError::UndefinedLabel {
            line: line_num,
            name,
        }),
        operand => Ok(operand),
    }
}
