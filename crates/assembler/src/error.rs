//! Error types for the RISC loader.

use risc_common::ErrorKind;
use thiserror::Error;

/// Errors produced while loading source text.
///
/// Only unresolved symbols fail a load. Every other defect is kept in the
/// program and reported by the VM if the line executes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// An operand is a bare identifier that no line defines as a label.
    #[error("line {line}: undefined label '{name}'")]
    UndefinedLabel { line: usize, name: String },
}

impl LoadError {
    /// Taxonomy classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::UndefinedLabel { .. } => ErrorKind::LabelError,
        }
    }

    /// 1-based source line of the failure.
    pub fn line(&self) -> usize {
        match self {
            LoadError::UndefinedLabel { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_undefined_label() {
        let e = LoadError::UndefinedLabel {
            line: 3,
            name: "loop".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: undefined label 'loop'");
        assert_eq!(e.kind(), ErrorKind::LabelError);
        assert_eq!(e.line(), 3);
    }

    #[test]
    fn error_clone_and_eq() {
        let e1 = LoadError::UndefinedLabel {
            line: 1,
            name: "x".to_string(),
        };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
