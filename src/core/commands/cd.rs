use super::{BuiltinCommand, BuiltinContext, CommandError, Outcome};
use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    /// `$HOME` as set (even when empty), else the password database entry
    /// for the current uid.
    fn home_dir(&self) -> Result<PathBuf, CommandError> {
        match env::var_os("HOME") {
            Some(home) => Ok(PathBuf::from(home)),
            None => dirs::home_dir().ok_or(CommandError::HomeDirNotFound),
        }
    }
}

impl BuiltinCommand for CdCommand {
    fn execute(
        &self,
        args: &[String],
        _ctx: &mut BuiltinContext<'_>,
    ) -> Result<Outcome, CommandError> {
        let target = match args.first() {
            Some(path) => PathBuf::from(path),
            None => self.home_dir()?,
        };

        env::set_current_dir(&target).map_err(|source| CommandError::DirectoryChange {
            path: target.clone(),
            source,
        })?;
        log::debug!("cd: now in {}", target.display());
        Ok(Outcome::Continue)
    }
}
