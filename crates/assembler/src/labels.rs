//! Label collection and substitution.
//!
//! Labels are resolved in two passes so that a jump may name a label defined
//! further down the file.

use std::collections::HashMap;

use crate::lexer::TokenLine;

/// Label name → 0-based line index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: HashMap<String, usize>,
}

impl LabelTable {
    /// First pass: record every label definition. A later definition of the
    /// same name replaces an earlier one.
    pub(crate) fn collect(lines: &[TokenLine]) -> Self {
        let mut entries = HashMap::new();
        for (idx, line) in lines.iter().enumerate() {
            if let Some(name) = &line.label {
                entries.insert(name.clone(), idx);
            }
        }
        Self { entries }
    }

    /// Line index bound to `name`.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no labels were defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels sorted by line, then name.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self
            .entries
            .iter()
            .map(|(name, &idx)| (name.as_str(), idx))
            .collect();
        sorted.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        sorted
    }

    /// Second pass: replace every token that exactly equals a label name with
    /// the label's line index in decimal.
    pub(crate) fn substitute(&self, tokens: &mut [String]) {
        for token in tokens.iter_mut() {
            if let Some(idx) = self.get(token) {
                *token = idx.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize_line;

    fn table(text: &str) -> LabelTable {
        let lines: Vec<_> = text.lines().map(tokenize_line).collect();
        LabelTable::collect(&lines)
    }

    #[test]
    fn collects_line_indices() {
        let labels = table("start: PSH 1\n\nloop: JMP loop\nend:");
        assert_eq!(labels.get("start"), Some(0));
        assert_eq!(labels.get("loop"), Some(2));
        assert_eq!(labels.get("end"), Some(3));
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn last_definition_wins() {
        let labels = table("a: HLT\na: HLT\na: HLT");
        assert_eq!(labels.get("a"), Some(2));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn substitution_is_exact_match_only() {
        let labels = table("\nloop: HLT");
        let mut tokens = vec![
            "JMP".to_string(),
            "loop".to_string(),
            "[loop]".to_string(),
            "loops".to_string(),
        ];
        labels.substitute(&mut tokens);
        assert_eq!(tokens, vec!["JMP", "1", "[loop]", "loops"]);
    }

    #[test]
    fn sorted_by_line() {
        let labels = table("b: HLT\na: HLT\nc: HLT");
        assert_eq!(labels.sorted(), vec![("b", 0), ("a", 1), ("c", 2)]);
    }
}
