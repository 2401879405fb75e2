use labsh::config::{ShellConfig, LOG_VAR};
use labsh::flags::Flags;
use labsh::shell::Shell;
use std::env;

fn main() -> Result<(), labsh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args);

    for opt in flags.unknown() {
        eprintln!("labsh: invalid option -- '{}'", opt.trim_start_matches('-'));
    }

    if flags.is_set("version") {
        println!("{}", Flags::version_string());
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_VAR, "warn"))
        .format_timestamp(None)
        .init();

    let mut shell = Shell::new(ShellConfig::from_env())?;
    shell.run()
}
