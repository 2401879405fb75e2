use std::fs::File;
use std::os::unix::io::AsRawFd;

use labsh::config::ShellConfig;
use labsh::core::commands::Outcome;
use labsh::error::ShellError;
use labsh::input::HistorySource;
use labsh::shell::{Session, Shell};

fn shell(devnull: &File) -> Shell {
    let config = ShellConfig {
        color: false,
        ..ShellConfig::new()
    };
    let session = Session::with_terminal(devnull.as_raw_fd(), &config).unwrap();
    Shell::with_session(session, &config).unwrap()
}

#[test]
fn blank_lines_are_skipped() {
    let devnull = File::open("/dev/null").unwrap();
    let mut shell = shell(&devnull);

    assert_eq!(shell.eval("").unwrap(), Outcome::Continue);
    assert_eq!(shell.eval(" \t  ").unwrap(), Outcome::Continue);
    assert_eq!(shell.history().entries().count(), 0);
}

#[test]
fn lines_are_trimmed_into_history() {
    let devnull = File::open("/dev/null").unwrap();
    let mut shell = shell(&devnull);

    assert_eq!(shell.eval("  true  ").unwrap(), Outcome::Continue);
    assert_eq!(shell.eval("history").unwrap(), Outcome::Continue);

    let lines: Vec<&str> = shell.history().entries().collect();
    assert_eq!(lines, vec!["true", "history"]);
}

#[test]
fn exit_ends_the_loop() {
    let devnull = File::open("/dev/null").unwrap();
    let mut shell = shell(&devnull);

    assert_eq!(shell.eval("exit").unwrap(), Outcome::Exit);
}

#[test]
fn errors_are_recoverable() {
    let devnull = File::open("/dev/null").unwrap();
    let mut shell = shell(&devnull);

    assert!(matches!(
        shell.eval("cd /nonexistent-path-xyz"),
        Err(ShellError::Command(_))
    ));
    // A failing external program is not an error for the shell.
    assert_eq!(shell.eval("/no/such/executable").unwrap(), Outcome::Continue);
    assert_eq!(shell.eval("false").unwrap(), Outcome::Continue);
    assert_eq!(shell.eval("true").unwrap(), Outcome::Continue);
}

#[test]
fn session_is_not_interactive_without_a_tty() {
    let devnull = File::open("/dev/null").unwrap();
    let shell = shell(&devnull);

    assert!(!shell.session().is_interactive());
    assert!(shell.session().saved_modes().is_none());
}
