use super::{BuiltinCommand, BuiltinContext, CommandError, Outcome};

#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl BuiltinCommand for HistoryCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut BuiltinContext<'_>,
    ) -> Result<Outcome, CommandError> {
        let base = ctx.history.base();
        for (offset, line) in ctx.history.entries().enumerate() {
            writeln!(ctx.out, "{}  {}", base + offset, line)?;
        }
        ctx.out.flush()?;
        Ok(Outcome::Continue)
    }
}
