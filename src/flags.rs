use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    unknown: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                value: None,
            },
        );

        Flags {
            flags,
            unknown: Vec::new(),
        }
    }

    /// getopt-style: unknown options are collected, operands are ignored.
    pub fn parse(&mut self, args: &[String]) {
        for arg in args {
            if arg == "--" {
                break;
            }
            if !arg.starts_with('-') || arg == "-" {
                continue;
            }

            if let Some(flag) = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
            {
                flag.value = Some("true".to_string());
                continue;
            }

            if arg.starts_with("--") {
                self.unknown.push(arg.clone());
                continue;
            }

            // Bundled short options such as `-vx`.
            for opt in arg.chars().skip(1) {
                let short = format!("-{}", opt);
                match self.flags.values_mut().find(|flag| flag.short == short) {
                    Some(flag) => flag.value = Some("true".to_string()),
                    None => self.unknown.push(short),
                }
            }
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    pub fn version_string() -> String {
        format!(
            "Shell Version: {}.{}",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR")
        )
    }
}
