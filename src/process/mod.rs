use std::{ffi::NulError, fmt, io};

pub mod launcher;
pub mod signal;

pub use launcher::{launch, ChildStatus, LaunchReport};
pub use signal::{apply_disposition, Disposition, JOB_CONTROL_SIGNALS};

#[derive(Debug)]
pub enum ProcessError {
    EmptyCommand,
    InvalidArgument(NulError),
    Fork(io::Error),
    Wait(io::Error),
    Signal(io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::EmptyCommand => write!(f, "empty command"),
            ProcessError::InvalidArgument(e) => write!(f, "invalid argument: {}", e),
            ProcessError::Fork(e) => write!(f, "fork: {}", e),
            ProcessError::Wait(e) => write!(f, "waitpid: {}", e),
            ProcessError::Signal(e) => write!(f, "signal: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::InvalidArgument(e) => Some(e),
            ProcessError::Fork(e) | ProcessError::Wait(e) | ProcessError::Signal(e) => Some(e),
            ProcessError::EmptyCommand => None,
        }
    }
}
