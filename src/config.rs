use std::env;

pub const PROMPT_VAR: &str = "MY_PROMPT";
pub const DEFAULT_PROMPT: &str = "shell> ";
pub const LOG_VAR: &str = "LABSH_LOG";

/// Reads the prompt from `var`, used verbatim when set.
pub fn prompt_from_env(var: &str) -> String {
    env::var(var).unwrap_or_else(|_| DEFAULT_PROMPT.to_string())
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub prompt_var: String,
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_var: PROMPT_VAR.to_string(),
            color: true,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Honours the `NO_COLOR` convention.
    pub fn from_env() -> Self {
        Self {
            color: env::var_os("NO_COLOR").is_none(),
            ..Self::default()
        }
    }

    pub fn with_prompt_var(mut self, var: impl Into<String>) -> Self {
        self.prompt_var = var.into();
        self
    }

    pub fn prompt(&self) -> String {
        prompt_from_env(&self.prompt_var)
    }
}
