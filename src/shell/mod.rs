use std::io;

use log::debug;
use rustyline::{error::ReadlineError, history::FileHistory, Editor};

mod session;

pub use session::Session;

use crate::{
    config::ShellConfig,
    core::commands::{BuiltinContext, BuiltinTable, Dispatch, Outcome},
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::ShellHelper,
    parser::{cmd_parse, trim_white},
    process,
};

pub struct Shell {
    pub(crate) editor: Editor<ShellHelper, FileHistory>,
    pub(crate) session: Session,
    pub(crate) builtins: BuiltinTable,
    pub(crate) highlighter: SyntaxHighlighter,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let session = Session::init(&config)?;
        Self::with_session(session, &config)
    }

    pub fn with_session(session: Session, config: &ShellConfig) -> Result<Self, ShellError> {
        let (line_colors, error_colors) = if config.color {
            (
                SyntaxHighlighter::for_fd(libc::STDOUT_FILENO),
                SyntaxHighlighter::for_fd(libc::STDERR_FILENO),
            )
        } else {
            (SyntaxHighlighter::plain(), SyntaxHighlighter::plain())
        };
        let builtins = BuiltinTable::new();

        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;
        editor.set_helper(Some(ShellHelper::new(builtins.names(), line_colors)));

        Ok(Shell {
            editor,
            session,
            builtins,
            highlighter: error_colors,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read-eval loop. Returns on `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.session.prompt().to_string();
            match self.editor.readline(&prompt) {
                Ok(line) => match self.eval(&line) {
                    Ok(Outcome::Exit) => break,
                    Ok(Outcome::Continue) => {}
                    Err(e) => self.report(&e),
                },
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                // A failed read will not recover; treat it like end of input.
                Err(e) => {
                    self.report(&ShellError::Readline(e));
                    break;
                }
            }
        }
        debug!("leaving read loop");
        Ok(())
    }

    /// Handles one input line: built-ins first, then an external program.
    pub fn eval(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let line = trim_white(line);
        if line.is_empty() {
            return Ok(Outcome::Continue);
        }

        if let Err(e) = self.editor.add_history_entry(line) {
            self.report(&ShellError::Readline(e));
        }

        let cmd = cmd_parse(line);
        let dispatch = {
            let mut out = io::stdout().lock();
            let mut ctx = BuiltinContext {
                history: self.editor.history(),
                out: &mut out,
            };
            self.builtins.dispatch(&cmd, &mut ctx)?
        };

        match dispatch {
            Dispatch::Handled(outcome) => Ok(outcome),
            Dispatch::NotHandled => {
                let report = process::launch(&cmd)?;
                // The exit status is not surfaced to the user.
                debug!("{:?} exited: {:?}", cmd.name(), report.status);
                Ok(Outcome::Continue)
            }
        }
    }

    fn report(&self, err: &ShellError) {
        eprintln!("{}", self.highlighter.highlight_error(&err.to_string()));
    }

    pub fn history(&self) -> &FileHistory {
        self.editor.history()
    }
}
