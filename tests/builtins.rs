use std::env;
use std::fs;
use std::path::PathBuf;

use labsh::core::commands::{BuiltinContext, BuiltinTable, CommandError, Dispatch, Outcome};
use labsh::parser::cmd_parse;

fn dispatch(line: &str) -> Result<Dispatch, CommandError> {
    let table = BuiltinTable::new();
    let history: Vec<String> = Vec::new();
    let mut out = Vec::new();
    let mut ctx = BuiltinContext {
        history: &history,
        out: &mut out,
    };
    table.dispatch(&cmd_parse(line), &mut ctx)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("labsh_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.canonicalize().unwrap()
}

// Working directory and HOME are process-wide, so everything runs in one test.
#[test]
fn cd_changes_working_directory() {
    let target = scratch_dir("cd_target");
    let home = scratch_dir("cd_home");

    let result = dispatch(&format!("cd {}", target.display()));
    assert!(matches!(result, Ok(Dispatch::Handled(Outcome::Continue))));
    assert_eq!(env::current_dir().unwrap(), target);

    // A failed cd leaves the directory alone.
    let result = dispatch("cd /nonexistent-path-xyz");
    assert!(matches!(result, Err(CommandError::DirectoryChange { .. })));
    assert_eq!(env::current_dir().unwrap(), target);

    // No argument goes to $HOME.
    env::set_var("HOME", &home);
    let result = dispatch("cd");
    assert!(matches!(result, Ok(Dispatch::Handled(Outcome::Continue))));
    assert_eq!(env::current_dir().unwrap(), home);

    // Relative paths resolve against the current directory.
    fs::create_dir_all(home.join("child")).unwrap();
    assert!(dispatch("cd child").is_ok());
    assert_eq!(env::current_dir().unwrap(), home.join("child"));

    // An empty $HOME is used as given, so the change fails in place.
    env::set_var("HOME", "");
    match dispatch("cd") {
        Err(CommandError::DirectoryChange { path, source }) => {
            assert_eq!(path, PathBuf::new());
            assert_eq!(source.raw_os_error(), Some(libc::ENOENT));
        }
        other => panic!("expected DirectoryChange, got {:?}", other),
    }
    assert_eq!(env::current_dir().unwrap(), home.join("child"));

    // Without $HOME the password database is consulted.
    env::remove_var("HOME");
    if let Some(pw_home) = dirs::home_dir().filter(|dir| dir.is_dir()) {
        assert!(dispatch("cd").is_ok());
        assert_eq!(
            env::current_dir().unwrap(),
            pw_home.canonicalize().unwrap()
        );
    }

    env::set_current_dir(env::temp_dir()).unwrap();
    fs::remove_dir_all(&target).unwrap();
    fs::remove_dir_all(&home).unwrap();
}
