//! End-to-end tests for the `markflow` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const OCEAN: &str = r##"{"ocean": {"bg":"#000000","text":"#ffffff","accent":"#00ffff",
    "code_bg":"#111111","border":"#222222","quote_bar":"#00ffff","table_header":"#111111"}}"##;

fn markflow(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("markflow").unwrap();
    cmd.env_remove("MARKFLOW_THEMES")
        .env_remove("MARKFLOW_TITLE")
        .env_remove("RUST_LOG")
        .arg("--themes")
        .arg(temp.path().join("themes.json"));
    cmd
}

fn write_input(temp: &TempDir, content: &str) -> std::path::PathBuf {
    let path = temp.path().join("input.md");
    fs::write(&path, content).unwrap();
    path
}

/// `(background-color, color)` of the `body` rule.
fn body_colors(html: &str) -> (String, String) {
    let re = Regex::new(r"body \{\s*background-color: (#[0-9a-f]{6});\s*color: (#[0-9a-f]{6});")
        .unwrap();
    let caps = re.captures(html).expect("body rule present");
    (caps[1].to_string(), caps[2].to_string())
}

fn convert(temp: &TempDir, input: &Path, output: &Path, theme: &str) {
    markflow(temp)
        .arg(input)
        .arg(output)
        .arg(theme)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Success! Theme: {theme}")));
}

#[test]
fn test_hue_theme_end_to_end() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "# Title\n\nSome ++emph++ text.");
    let output = temp.path().join("out.html");

    convert(&temp, &input, &output, "hue-200-dark");

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<style>"));
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<ins>emph</ins>"));
    let (bg, text) = body_colors(&html);
    assert_ne!(bg, text);
}

#[test]
fn test_registry_theme() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("themes.json"), OCEAN).unwrap();
    let input = write_input(&temp, "> quoted\n");
    let output = temp.path().join("out.html");

    convert(&temp, &input, &output, "ocean");

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(body_colors(&html), ("#000000".into(), "#ffffff".into()));
    assert!(html.contains("border-left: 5px solid #00ffff"));
    assert!(html.contains("<blockquote>"));
}

#[test]
fn test_unknown_theme_without_registry_uses_default() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "text");
    let output = temp.path().join("out.html");

    convert(&temp, &input, &output, "anything-not-hue");

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(body_colors(&html), ("#1e1e1e".into(), "#d4d4d4".into()));
}

#[test]
fn test_missing_input_reports_error() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.html");

    markflow(&temp)
        .arg(temp.path().join("absent.md"))
        .arg(&output)
        .arg("hue-10")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("absent.md not found."));
    assert!(!output.exists());
}

#[test]
fn test_incomplete_registry_entry_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("themes.json"), r##"{"half": {"bg": "#000000"}}"##).unwrap();
    let input = write_input(&temp, "text");
    let output = temp.path().join("out.html");

    markflow(&temp)
        .arg(&input)
        .arg(&output)
        .arg("half")
        .assert()
        .failure()
        .stderr(predicate::str::contains("theme 'half' is invalid"));
    assert!(!output.exists());
}

#[test]
fn test_missing_arguments_print_usage() {
    let temp = TempDir::new().unwrap();
    markflow(&temp)
        .arg("input.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("themes.json"), OCEAN).unwrap();
    let input = write_input(
        &temp,
        "# Doc\n\nLine one\nline two [[Wiki Page]].\n\n| a | b |\n|---|---|\n| 1 | 2 |\n",
    );
    let first = temp.path().join("first.html");
    let second = temp.path().join("second.html");

    convert(&temp, &input, &first, "ocean");
    convert(&temp, &input, &second, "ocean");

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_title_and_no_extensions() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "one\ntwo [[Page]]\n");
    let output = temp.path().join("out.html");

    markflow(&temp)
        .arg(&input)
        .arg(&output)
        .arg("hue-45-light")
        .arg("--title")
        .arg("My Notes")
        .arg("--no-extensions")
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>My Notes</title>"));
    assert!(html.contains("[[Page]]"));
    assert!(!html.contains("<br />"));
}
