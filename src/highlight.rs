use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Colour only when `fd` is a terminal.
    pub fn for_fd(fd: std::os::unix::io::RawFd) -> Self {
        if unsafe { libc::isatty(fd) } == 1 {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word (cyan when it is a built-in, bold otherwise)
    /// and flags. Whitespace is left untouched so the cursor stays aligned.
    pub fn highlight_command(&self, input: &str, is_builtin: impl Fn(&str) -> bool) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut first = true;
        let mut rest = input;
        while !rest.is_empty() {
            let ws_len = rest.len() - rest.trim_start().len();
            out.push_str(&rest[..ws_len]);
            rest = &rest[ws_len..];

            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            if word_len == 0 {
                break;
            }
            let word = &rest[..word_len];
            rest = &rest[word_len..];

            let styled = if first {
                let style = if is_builtin(word) {
                    Style::builder().foreground(Color::Cyan).bold().build()
                } else {
                    Style::builder().bold().build()
                };
                word.style(style).to_string()
            } else if word.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                word.style(flag_style).to_string()
            } else {
                word.to_string()
            };
            out.push_str(&styled);
            first = false;
        }

        out
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passthrough() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(
            highlighter.highlight_command("  cd  -P /tmp ", |w| w == "cd"),
            "  cd  -P /tmp "
        );
        assert_eq!(highlighter.highlight_error("cd: oops"), "cd: oops");
    }

    #[test]
    fn test_no_color_off_a_terminal() {
        let devnull = std::fs::File::open("/dev/null").unwrap();
        let highlighter =
            SyntaxHighlighter::for_fd(std::os::unix::io::AsRawFd::as_raw_fd(&devnull));
        assert_eq!(highlighter.highlight_error("cd: oops"), "cd: oops");
        assert_eq!(highlighter.highlight_command("cd -P", |_| true), "cd -P");
    }
}
