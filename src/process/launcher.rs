use std::ffi::{CStr, CString};
use std::io;
use std::ptr;

use libc::{c_char, c_int, pid_t};
use log::debug;

use super::signal::{apply_disposition, Disposition};
use super::ProcessError;
use crate::parser::Command;

/// How a waited-for child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(i32),
}

impl ChildStatus {
    fn from_raw(status: c_int) -> Self {
        if libc::WIFSIGNALED(status) {
            ChildStatus::Signaled(libc::WTERMSIG(status))
        } else {
            ChildStatus::Exited(libc::WEXITSTATUS(status))
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ChildStatus::Exited(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchReport {
    pub pid: pid_t,
    pub status: ChildStatus,
}

/// Forks, execs `cmd` in the child via the `PATH` search, and blocks until
/// that child terminates.
pub fn launch(cmd: &Command) -> Result<LaunchReport, ProcessError> {
    if cmd.is_empty() {
        return Err(ProcessError::EmptyCommand);
    }

    // Everything the child needs is built before forking.
    let args = cmd.to_cstrings()?;
    let mut argv: Vec<*const c_char> = args.iter().map(|arg| arg.as_ptr()).collect();
    argv.push(ptr::null());
    let exec_prefix = format!("execvp: {}: ", args[0].to_string_lossy());

    let pid = unsafe { libc::fork() };
    match pid {
        -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
        0 => exec_child(&args[0], &argv, exec_prefix.as_bytes()),
        child => {
            debug!("forked {} as pid {}", args[0].to_string_lossy(), child);
            let status = wait_for(child)?;
            debug!("pid {} finished: {:?}", child, status);
            Ok(LaunchReport { pid: child, status })
        }
    }
}

// Runs in the forked child: no allocation and no locks past this point.
fn exec_child(program: &CString, argv: &[*const c_char], exec_prefix: &[u8]) -> ! {
    if apply_disposition(Disposition::Default).is_err() {
        report_in_child(b"signal: ", last_errno());
    }

    unsafe {
        libc::execvp(program.as_ptr(), argv.as_ptr());
    }

    report_in_child(exec_prefix, last_errno());
    unsafe { libc::_exit(libc::EXIT_FAILURE) }
}

fn last_errno() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Writes `<prefix><strerror(errno)>\n` to fd 2 with raw `write(2)` calls.
fn report_in_child(prefix: &[u8], errno: c_int) {
    let reason = unsafe { CStr::from_ptr(libc::strerror(errno)) };
    write_stderr(prefix);
    write_stderr(reason.to_bytes());
    write_stderr(b"\n");
}

fn write_stderr(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        let written =
            unsafe { libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len()) };
        if written <= 0 {
            break;
        }
        bytes = &bytes[written as usize..];
    }
}

fn wait_for(pid: pid_t) -> Result<ChildStatus, ProcessError> {
    let mut status: c_int = 0;
    loop {
        let rc = unsafe { libc::waitpid(pid, &mut status, 0) };
        if rc == pid {
            return Ok(ChildStatus::from_raw(status));
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(ProcessError::Wait(err));
        }
    }
}
