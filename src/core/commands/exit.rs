use super::{BuiltinCommand, BuiltinContext, CommandError, Outcome};

/// Ends the session. Arguments are ignored and the shell always exits 0.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl BuiltinCommand for ExitCommand {
    fn execute(
        &self,
        _args: &[String],
        _ctx: &mut BuiltinContext<'_>,
    ) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}
