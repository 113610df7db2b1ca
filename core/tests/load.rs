use std::io::Write;

use command_tokenizer_core::{OptionKind, SchemaError, ValueKind, load_command};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_json_schema() {
    let file = write_temp(
        ".json",
        r#"{
            "description": "demo",
            "options": { "config": { "kind": "file", "aliases": ["c"] } },
            "commands": { "serve": { "options": { "port": { "kind": "number" } } } }
        }"#,
    );

    let schema = load_command(file.path()).unwrap();
    assert_eq!(schema.description.as_deref(), Some("demo"));
    assert_eq!(
        schema.options["config"].kind,
        OptionKind::Single(ValueKind::File)
    );
    assert_eq!(
        schema.commands["serve"].options["port"].kind,
        OptionKind::Single(ValueKind::Number)
    );
}

#[test]
fn test_load_yaml_schema() {
    let file = write_temp(
        ".yaml",
        r#"
options:
  include: { kind: dir-list, aliases: [I] }
  quiet: { kind: flag, hidden: true }
positionals:
  - names: [input, src]
    kind: file
    multiple: true
"#,
    );

    let schema = load_command(file.path()).unwrap();
    assert_eq!(
        schema.options["include"].kind,
        OptionKind::List(ValueKind::Dir)
    );
    assert!(schema.options["quiet"].hidden);
    assert_eq!(schema.positionals[0].names, vec!["input", "src"]);
    assert!(schema.positionals[0].multiple);
}

#[test]
fn test_load_reports_bad_kind() {
    let file = write_temp(".yml", "options:\n  x: { kind: toggle }\n");
    assert!(matches!(
        load_command(file.path()),
        Err(SchemaError::Yaml(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_command(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SchemaError::Io(_))));
}
