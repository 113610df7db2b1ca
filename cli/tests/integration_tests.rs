use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

const SCHEMA_YAML: &str = r#"
description: demo archiver
options:
  verbose: { kind: count, aliases: [v] }
  file: { kind: file, aliases: [f] }
  exclude: { kind: string-list }
  color: { kind: flag }
commands:
  extract:
    options:
      into: { kind: dir, aliases: [C] }
  list: {}
"#;

fn write_schema(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write schema");
    path
}

fn run(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_cmd-tokenize"))
        .args(args)
        .output()
        .expect("failed to run cmd-tokenize")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_prints_json_events() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "tar.yaml", SCHEMA_YAML);

    let output = run(&[
        "parse",
        "--schema",
        schema.to_str().unwrap(),
        "--",
        "-vf",
        "a.tar",
        "extract",
        "--no-color",
        "-C",
        "out",
        "--",
        "-weird",
    ]);
    assert!(output.status.success(), "parse should succeed");

    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        events,
        serde_json::json!([
            { "type": "flag", "name": "verbose", "value": true },
            { "type": "option", "name": "file", "value": "a.tar" },
            { "type": "command", "name": "extract" },
            { "type": "flag", "name": "color", "value": false },
            { "type": "option", "name": "into", "value": "out" },
            { "type": "positional", "value": "-weird" },
        ])
    );
}

#[test]
fn parse_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "tar.yaml", SCHEMA_YAML);

    let output = run(&[
        "parse",
        "--schema",
        schema.to_str().unwrap(),
        "--format",
        "text",
        "--",
        "list",
        "--exclude=*.o",
        "-",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "command list\noption exclude=*.o\npositional -\n"
    );
}

#[test]
fn parse_reads_json_schema() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(
        dir.path(),
        "app.json",
        r#"{ "options": { "port": { "kind": "number", "aliases": ["p"] } } }"#,
    );

    let output = run(&[
        "parse",
        "--schema",
        schema.to_str().unwrap(),
        "--format",
        "text",
        "--",
        "-p",
        "8080",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "option port=8080\n");
}

#[test]
fn parse_fails_on_missing_schema() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");

    let output = run(&["parse", "--schema", missing.to_str().unwrap(), "--", "x"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Failed to load schema"), "{stderr}");
}

// ---------------------------------------------------------------------------
// complete
// ---------------------------------------------------------------------------

#[test]
fn complete_lists_options_then_commands() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "tar.yaml", SCHEMA_YAML);

    let output = run(&[
        "complete",
        "--schema",
        schema.to_str().unwrap(),
        "--",
        "tar",
        "--color",
        "",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "--exclude\n--file\n--into\n--verbose\nextract\nlist\n"
    );
}

#[test]
fn complete_filters_partial_word() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "tar.yaml", SCHEMA_YAML);

    let output = run(&[
        "complete",
        "--schema",
        schema.to_str().unwrap(),
        "--",
        "tar",
        "ex",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "extract\n");
}

#[test]
fn complete_marks_path_values() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "tar.yaml", SCHEMA_YAML);

    let output = run(&[
        "complete",
        "--schema",
        schema.to_str().unwrap(),
        "--",
        "tar",
        "--file",
        "",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().next(), Some("#path"));
}

#[test]
fn complete_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "tar.yaml", SCHEMA_YAML);

    let output = run(&[
        "complete",
        "--schema",
        schema.to_str().unwrap(),
        "--json",
        "--",
        "tar",
        "--exclude",
        "",
    ]);
    assert!(output.status.success());
    let completion: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(completion["value_hint"], "string");
    assert!(
        completion["words"]
            .as_array()
            .unwrap()
            .iter()
            .any(|w| w == "--exclude")
    );
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_schema(dir.path(), "good.yaml", SCHEMA_YAML);
    let bad = write_schema(
        dir.path(),
        "bad.yaml",
        r#"
options:
  level: { kind: number, aliases: [l] }
commands:
  ls:
    options:
      long: { kind: flag, aliases: [l] }
"#,
    );

    let output = run(&["check", "--schema", good.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("ok (5 options)"));

    let output = run(&[
        "check",
        "--schema",
        good.to_str().unwrap(),
        bad.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("conflicting option definition for `l`"), "{stderr}");
}
