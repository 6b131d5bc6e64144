// Tests for command-line parsing

use indirection::config::{usage, Config, ConfigError, Mode, DEFAULT_SNAPSHOT_LIMIT};
use indirection::walkthrough::Scenario;

fn parse(args: &[&str]) -> Result<Config, ConfigError> {
    Config::from_args(args.iter().map(|s| s.to_string()))
}

#[test]
fn test_defaults() {
    let config = parse(&[]).unwrap();
    assert_eq!(config.mode, Mode::Echo);
    assert_eq!(config.scenarios, Scenario::ALL.to_vec());
    assert_eq!(config.snapshot_limit, DEFAULT_SNAPSHOT_LIMIT);
    assert!(!config.show_help);
}

#[test]
fn test_flags() {
    let config = parse(&[
        "--tui",
        "--scenario",
        "edge",
        "--scenario",
        "pointer",
        "--snapshot-limit",
        "4096",
    ])
    .unwrap();
    assert_eq!(config.mode, Mode::Tui);
    assert_eq!(config.scenarios, vec![Scenario::Edge, Scenario::Pointer]);
    assert_eq!(config.snapshot_limit, 4096);

    assert!(parse(&["-h"]).unwrap().show_help);
    assert_eq!(
        parse(&["--scenario", "all"]).unwrap().scenarios,
        Scenario::ALL.to_vec()
    );
}

#[test]
fn test_errors() {
    assert_eq!(
        parse(&["--verbose"]),
        Err(ConfigError::UnknownFlag("--verbose".to_string()))
    );
    assert_eq!(
        parse(&["--scenario"]),
        Err(ConfigError::MissingValue { flag: "--scenario" })
    );
    assert_eq!(
        parse(&["--scenario", "heap"]),
        Err(ConfigError::InvalidValue {
            flag: "--scenario",
            value: "heap".to_string()
        })
    );
    assert!(matches!(
        parse(&["--snapshot-limit", "0"]),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        parse(&["--snapshot-limit", "lots"]),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_usage_mentions_every_option() {
    let text = usage("indirection");
    for option in ["--tui", "--scenario", "--snapshot-limit", "--help"] {
        assert!(text.contains(option), "usage is missing {}", option);
    }
}
