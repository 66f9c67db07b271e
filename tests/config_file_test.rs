//! Configuration file loading tests.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_history::{AppConfig, Cli};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "reverse_moves = true\nlog_file = \"game.log\"\nlog_filter = \"debug\""
    )
    .expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert!(*config.reverse_moves());
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.toml");
    let cli = Cli::parse_from([
        "tictactoe_history",
        "--config",
        path.to_str().expect("utf-8 path"),
    ]);

    let err = AppConfig::resolve(&cli).expect_err("missing file");
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_flags_override_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_file = \"from_file.log\"").expect("write config");
    let cli = Cli::parse_from([
        "tictactoe_history",
        "--config",
        file.path().to_str().expect("utf-8 path"),
        "--reverse",
        "--log-file",
        "from_flag.log",
    ]);

    let config = AppConfig::resolve(&cli).expect("valid config");
    assert!(*config.reverse_moves());
    assert_eq!(config.log_file(), &PathBuf::from("from_flag.log"));
}
