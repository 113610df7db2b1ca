//! Schema file loading.
//!
//! Schemas are stored as JSON or YAML. The format is picked from the file
//! extension: `.json` is read as JSON, everything else as YAML (YAML is a
//! superset of JSON for the documents a schema produces).

use std::io::BufReader;
use std::path::Path;

use crate::Command;
use crate::error::Result;

/// Loads a command tree from a JSON or YAML file.
///
/// # Errors
///
/// Returns [`Io`](crate::SchemaError::Io) if the file cannot be read, or
/// [`Json`](crate::SchemaError::Json) / [`Yaml`](crate::SchemaError::Yaml)
/// if parsing fails.
///
/// # Examples
///
/// ```no_run
/// use command_tokenizer_core::load_command;
///
/// let schema = load_command("mycli.schema.yaml").unwrap();
/// println!("{} sub-commands", schema.commands.len());
/// ```
pub fn load_command(path: impl AsRef<Path>) -> Result<Command> {
    let path = path.as_ref();
    let reader = BufReader::new(std::fs::File::open(path)?);
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_reader(reader)?)
    } else {
        Ok(serde_yaml::from_reader(reader)?)
    }
}
