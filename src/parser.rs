use std::ffi::CString;

use crate::process::ProcessError;

/// A parsed command line. `args[0]` is the program or built-in name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    args: Vec<String>,
}

impl Command {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    pub fn name(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Arguments after the command name.
    pub fn params(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Owned C strings for `execvp`. The pointer vector built from these is
    /// NULL-terminated by the launcher.
    pub fn to_cstrings(&self) -> Result<Vec<CString>, ProcessError> {
        self.args
            .iter()
            .map(|arg| CString::new(arg.as_str()).map_err(ProcessError::InvalidArgument))
            .collect()
    }
}

impl From<Vec<String>> for Command {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}

/// Strips leading and trailing whitespace. An all-whitespace line becomes "".
pub fn trim_white(line: &str) -> &str {
    line.trim()
}

/// Splits a line into whitespace-separated tokens. No quoting or expansion;
/// every token is an owned copy so the caller may reuse `line` right away.
pub fn cmd_parse(line: &str) -> Command {
    Command::new(line.split_whitespace().map(str::to_owned).collect())
}
