use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::highlight::SyntaxHighlighter;

/// rustyline glue: colours the line and completes built-in names.
#[derive(Clone)]
pub struct ShellHelper {
    builtins: Vec<&'static str>,
    highlighter: SyntaxHighlighter,
}

impl ShellHelper {
    pub fn new(
        builtins: impl IntoIterator<Item = &'static str>,
        highlighter: SyntaxHighlighter,
    ) -> Self {
        Self {
            builtins: builtins.into_iter().collect(),
            highlighter,
        }
    }

    fn complete_builtin(&self, word: &str) -> Vec<Pair> {
        self.builtins
            .iter()
            .filter(|name| name.starts_with(word))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let is_builtin = |word: &str| self.builtins.iter().any(|name| *name == word);
        Cow::Owned(self.highlighter.highlight_command(line, is_builtin))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let start = line_up_to_cursor.len() - line_up_to_cursor.trim_start().len();
        let word = &line_up_to_cursor[start..];

        // Only the command word is completed.
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((start, self.complete_builtin(word)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> ShellHelper {
        ShellHelper::new(["cd", "exit", "history"], SyntaxHighlighter::plain())
    }

    #[test]
    fn test_complete_builtin_prefix() {
        let matches = helper().complete_builtin("hi");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "history");

        assert_eq!(helper().complete_builtin("").len(), 3);
        assert!(helper().complete_builtin("zz").is_empty());
    }

    #[test]
    fn test_highlight_without_color() {
        let helper = helper();
        assert_eq!(helper.highlight("cd /tmp", 0), "cd /tmp");
    }
}
