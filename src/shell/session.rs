use std::io;
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

use libc::pid_t;
use log::{debug, warn};

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::process::{apply_disposition, Disposition};

/// Terminal and process-group state owned by the running shell.
pub struct Session {
    terminal: RawFd,
    interactive: bool,
    pgid: pid_t,
    tmodes: Option<libc::termios>,
    prompt: String,
}

impl Session {
    /// Initializes against standard input.
    pub fn init(config: &ShellConfig) -> Result<Self, ShellError> {
        Self::with_terminal(libc::STDIN_FILENO, config)
    }

    /// When `terminal` is a tty: wait until the shell is in the foreground,
    /// ignore the job-control signals, become a process group leader, take
    /// the terminal, and save its modes.
    pub fn with_terminal(terminal: RawFd, config: &ShellConfig) -> Result<Self, ShellError> {
        let interactive = unsafe { libc::isatty(terminal) } == 1;
        let mut pgid = unsafe { libc::getpgrp() };
        let mut tmodes = None;

        if interactive {
            wait_for_foreground(terminal)?;
            apply_disposition(Disposition::Ignore)?;

            pgid = unsafe { libc::getpid() };
            // A session leader already leads its group and setpgid would fail.
            let group_leader = unsafe { libc::getpgrp() } == pgid;
            if !group_leader && unsafe { libc::setpgid(pgid, pgid) } == -1 {
                warn!("setpgid: {}", io::Error::last_os_error());
            }
            if unsafe { libc::tcsetpgrp(terminal, pgid) } == -1 {
                warn!("tcsetpgrp: {}", io::Error::last_os_error());
            }
            tmodes = save_modes(terminal);
        }

        debug!(
            "session on fd {}: interactive={} pgid={}",
            terminal, interactive, pgid
        );

        Ok(Session {
            terminal,
            interactive,
            pgid,
            tmodes,
            prompt: config.prompt(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn pgid(&self) -> pid_t {
        self.pgid
    }

    pub fn terminal(&self) -> RawFd {
        self.terminal
    }

    /// Terminal modes captured at start-up, if the session is interactive.
    pub fn saved_modes(&self) -> Option<&libc::termios> {
        self.tmodes.as_ref()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("session on fd {} closed", self.terminal);
    }
}

// Sends SIGTTIN to our own group until the terminal's foreground group is ours.
fn wait_for_foreground(terminal: RawFd) -> Result<(), ShellError> {
    loop {
        let pgid = unsafe { libc::getpgrp() };
        let foreground = unsafe { libc::tcgetpgrp(terminal) };
        if foreground == -1 {
            return Err(ShellError::Io(io::Error::last_os_error()));
        }
        if foreground == pgid {
            return Ok(());
        }
        debug!("pgid {} is in the background (foreground is {})", pgid, foreground);
        unsafe {
            libc::kill(-pgid, libc::SIGTTIN);
        }
    }
}

fn save_modes(terminal: RawFd) -> Option<libc::termios> {
    let mut modes = MaybeUninit::<libc::termios>::uninit();
    if unsafe { libc::tcgetattr(terminal, modes.as_mut_ptr()) } == -1 {
        warn!("tcgetattr: {}", io::Error::last_os_error());
        return None;
    }
    Some(unsafe { modes.assume_init() })
}
