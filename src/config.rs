//! Command-line configuration for the `indirection` binary

use crate::walkthrough::Scenario;
use std::fmt;

/// Default snapshot history budget (64 MiB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// How results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print echoed lines to stdout
    Echo,
    /// Open the step viewer
    Tui,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub scenarios: Vec<Scenario>,
    pub snapshot_limit: usize,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Echo,
            scenarios: Scenario::ALL.to_vec(),
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
            show_help: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue { flag: &'static str },
    InvalidValue { flag: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue { flag } => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "Invalid value '{}' for option '{}'", value, flag)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parse arguments, not including the program name.
    ///
    /// `--scenario` may be repeated; the first occurrence replaces the default
    /// list and `all` expands to every scenario.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut scenarios: Vec<Scenario> = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tui" => config.mode = Mode::Tui,
                "-h" | "--help" => config.show_help = true,
                "--scenario" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue { flag: "--scenario" })?;
                    if value == "all" {
                        scenarios.extend(Scenario::ALL);
                    } else {
                        let scenario =
                            value
                                .parse::<Scenario>()
                                .map_err(|_| ConfigError::InvalidValue {
                                    flag: "--scenario",
                                    value: value.clone(),
                                })?;
                        scenarios.push(scenario);
                    }
                }
                "--snapshot-limit" => {
                    let value = args.next().ok_or(ConfigError::MissingValue {
                        flag: "--snapshot-limit",
                    })?;
                    config.snapshot_limit = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&limit| limit > 0)
                        .ok_or(ConfigError::InvalidValue {
                            flag: "--snapshot-limit",
                            value,
                        })?;
                }
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }

        if !scenarios.is_empty() {
            config.scenarios = scenarios;
        }
        Ok(config)
    }
}

/// Usage text for `program_name`
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [--tui] [--scenario <pointer|reference|edge|all>]... [--snapshot-limit <bytes>]\n\
         \n\
         Options:\n\
         \x20 --tui                    Step through the recorded walkthrough\n\
         \x20 --scenario <name>        Scenario to run (repeatable, default: all)\n\
         \x20 --snapshot-limit <bytes> History memory budget (default: {})\n\
         \x20 -h, --help               Show this message",
        program_name, DEFAULT_SNAPSHOT_LIMIT
    )
}
