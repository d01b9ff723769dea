//! Listing: loaded program → canonical text.
//!
//! One output line per program line, prefixed with its 0-based index. Labels
//! have already been replaced by indices, so the listing shows exactly what
//! the VM executes.

use std::collections::HashSet;

use crate::lexer::LABEL_TERMINATOR;
use risc_common::{Line, Program};

/// Render a program as an indexed listing.
pub fn listing(program: &Program) -> String {
    let mut out = String::new();
    for (idx, line) in program.lines.iter().enumerate() {
        match line {
            Line::Blank => out.push_str(&format!("{idx:04}:\n")),
            other => out.push_str(&format!("{idx:04}: {other}\n")),
        }
    }
    out
}

/// Render a program as plain source text with no comments.
///
/// Loading the result yields an identical program. An unknown mnemonic
/// ending in `:` would read back as a label definition, so such lines get an
/// unreferenced label in front.
pub fn render(program: &Program) -> String {
    let texts: Vec<String> = program.lines.iter().map(ToString::to_string).collect();
    let spare = spare_label(&texts);

    let mut out = String::new();
    for (line, text) in program.lines.iter().zip(&texts) {
        if let Line::Unknown { mnemonic, .. } = line {
            if mnemonic.ends_with(LABEL_TERMINATOR) {
                out.push_str(&spare);
                out.push(LABEL_TERMINATOR);
                out.push(' ');
            }
        }
        out.push_str(text);
        out.push('\n');
    }
    out
}

/// A label name equal to no token in `texts`.
fn spare_label(texts: &[String]) -> String {
    let used: HashSet<&str> = texts.iter().flat_map(|t| t.split_whitespace()).collect();
    (0u32..)
        .map(|n| format!("_{n}"))
        .find(|name| !used.contains(name.as_str()))
        .unwrap_or_default()
}
