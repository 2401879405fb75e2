use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

mod cd;
mod exit;
mod history;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use history::HistoryCommand;

use crate::input::HistorySource;
use crate::parser::Command;

#[derive(Debug)]
pub enum CommandError {
    DirectoryChange { path: PathBuf, source: io::Error },
    HomeDirNotFound,
    IoError(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DirectoryChange { path, source } => {
                write!(f, "cd: {}: {}", path.display(), source)
            }
            CommandError::HomeDirNotFound => write!(f, "cd: home directory not found"),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::DirectoryChange { source, .. } => Some(source),
            CommandError::IoError(err) => Some(err),
            CommandError::HomeDirNotFound => None,
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the shell loop should do after a built-in ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled(Outcome),
    NotHandled,
}

/// Collaborators a built-in may touch.
pub struct BuiltinContext<'a> {
    pub history: &'a dyn HistorySource,
    pub out: &'a mut dyn Write,
}

pub trait BuiltinCommand {
    fn execute(&self, args: &[String], ctx: &mut BuiltinContext<'_>)
        -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    History(HistoryCommand),
}

impl BuiltinCommand for CommandType {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut BuiltinContext<'_>,
    ) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::History(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Fixed name -> handler table, consulted before any external launch.
#[derive(Clone)]
pub struct BuiltinTable {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinTable {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("history", CommandType::History(HistoryCommand::new()));
        Self { commands }
    }

    /// Runs `cmd` if it names a built-in. An empty command is not handled.
    pub fn dispatch(
        &self,
        cmd: &Command,
        ctx: &mut BuiltinContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let Some(builtin) = cmd.name().and_then(|name| self.commands.get(name)) else {
            return Ok(Dispatch::NotHandled);
        };

        log::debug!("dispatching built-in {:?}", cmd.name());
        builtin.execute(cmd.params(), ctx).map(Dispatch::Handled)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
