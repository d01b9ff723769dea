//! Tokenizer for RISC assembly text.

/// Comments start with `'` and extend to end of line.
pub(crate) const COMMENT: char = '\'';

/// A trailing `:` on the first token marks a label definition.
pub(crate) const LABEL_TERMINATOR: char = ':';

/// One source line split into an optional label and its remaining tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TokenLine {
    pub label: Option<String>,
    pub tokens: Vec<String>,
}

/// Tokenize a single line of assembly text.
///
/// Returns no tokens for blank lines and comment-only lines.
pub(crate) fn tokenize_line(line: &str) -> TokenLine {
    let line = match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();

    let label = match tokens.first() {
        Some(first) if first.ends_with(LABEL_TERMINATOR) => {
            let name = first[..first.len() - LABEL_TERMINATOR.len_utf8()].to_string();
            tokens.remove(0);
            Some(name)
        }
        _ => None,
    };

    TokenLine { label, tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_line() {
        assert_eq!(tokenize_line(""), TokenLine::default());
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(tokenize_line("   \t  "), TokenLine::default());
    }

    #[test]
    fn comment_only() {
        assert_eq!(tokenize_line("' this is a comment"), TokenLine::default());
    }

    #[test]
    fn opcode_with_comment() {
        let line = tokenize_line("PSH 5 ' push five");
        assert_eq!(line.label, None);
        assert_eq!(line.tokens, words(&["PSH", "5"]));
    }

    #[test]
    fn label_is_split_off() {
        let line = tokenize_line("loop: ADD [0]");
        assert_eq!(line.label.as_deref(), Some("loop"));
        assert_eq!(line.tokens, words(&["ADD", "[0]"]));
    }

    #[test]
    fn label_only_line() {
        let line = tokenize_line("  end:   ' nothing here");
        assert_eq!(line.label.as_deref(), Some("end"));
        assert!(line.tokens.is_empty());
    }

    #[test]
    fn colon_in_later_token_is_not_a_label() {
        let line = tokenize_line("MOV a: ACC");
        assert_eq!(line.label, None);
        assert_eq!(line.tokens, words(&["MOV", "a:", "ACC"]));
    }

    #[test]
    fn leading_whitespace_and_tabs() {
        let line = tokenize_line("\tMOV\t1  BAK");
        assert_eq!(line.tokens, words(&["MOV", "1", "BAK"]));
    }
}
