use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn swatch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swatch"))
        .env_remove("SWATCH_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run swatch")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn parse_prints_named_and_hex_colors() {
    let output = swatch(&["parse", "red", "#80FF0000", "--format", "hex"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["#FF5555", "#FF0000"]);

    let output = swatch(&["parse", "#80FF0000", "--format", "hex-alpha"]);
    assert_eq!(stdout_lines(&output), vec!["#80FF0000"]);
}

#[test]
fn parse_fails_on_bad_input() {
    let output = swatch(&["parse", "not-a-color"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-a-color"), "{stderr}");
}

#[test]
fn hsv_wraps_full_hue() {
    let output = swatch(&["hsv", "1.0", "1.0", "1.0"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["#FF0000"]);
}

#[test]
fn mix_prints_gradient() {
    let output = swatch(&["mix", "#000000", "#FFFFFF", "--steps", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["#000000", "#7F7F7F", "#FFFFFF"]);
}

#[test]
fn seeded_random_is_stable_across_runs() {
    let first = swatch(&["random", "--count", "3", "--seed", "42"]);
    let second = swatch(&["random", "--count", "3", "--seed", "42"]);
    assert!(first.status.success());
    assert_eq!(stdout_lines(&first).len(), 3);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn config_palette_and_default_format_apply() {
    let root = TempDir::new().unwrap();
    let config = root.path().join("swatch.toml");
    fs::write(
        &config,
        r##"
version = 1

[defaults]
format = "hex-alpha"

[palette]
accent = "#FF8800"
"##,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_swatch"))
        .env("SWATCH_CONFIG", &config)
        .args(["parse", "accent"])
        .output()
        .expect("failed to run swatch parse");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["#FFFF8800"]);

    let names = swatch(&["--config", config.to_str().unwrap(), "names"]);
    let listing = String::from_utf8_lossy(&names.stdout);
    assert!(listing.contains("dark-purple"));
    assert!(listing.contains("accent"));
}

#[test]
fn invalid_config_is_rejected() {
    let root = TempDir::new().unwrap();
    let config = root.path().join("swatch.toml");
    fs::write(&config, "version = 3").unwrap();

    let output = swatch(&["--config", config.to_str().unwrap(), "parse", "red"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("version 3"));
}
