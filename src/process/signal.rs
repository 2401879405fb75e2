use libc::{c_int, sighandler_t, SIG_DFL, SIG_ERR, SIG_IGN};
use signal_hook::consts::{SIGINT, SIGQUIT, SIGTSTP, SIGTTIN, SIGTTOU};

use crate::process::ProcessError;

/// Signals the shell ignores for itself and hands back to children at their
/// default disposition: interrupt, quit, and the three terminal stops.
pub const JOB_CONTROL_SIGNALS: [c_int; 5] = [SIGINT, SIGQUIT, SIGTSTP, SIGTTIN, SIGTTOU];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Applied once at session start.
    Ignore,
    /// Applied in the child between fork and exec.
    Default,
}

impl Disposition {
    fn handler(self) -> sighandler_t {
        match self {
            Disposition::Ignore => SIG_IGN,
            Disposition::Default => SIG_DFL,
        }
    }
}

/// Installs `disposition` for every signal in [`JOB_CONTROL_SIGNALS`].
///
/// Only calls `signal(2)`, so it is safe to use in a freshly forked child.
pub fn apply_disposition(disposition: Disposition) -> Result<(), ProcessError> {
    for &sig in JOB_CONTROL_SIGNALS.iter() {
        let previous = unsafe { libc::signal(sig, disposition.handler()) };
        if previous == SIG_ERR {
            return Err(ProcessError::Signal(std::io::Error::last_os_error()));
        }
    }
    Ok(())
}
