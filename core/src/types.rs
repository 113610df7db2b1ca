//! Schema type definitions for command structure modeling.
//!
//! A [`Command`] is a node in a tree: it owns its option definitions, its
//! positional definitions, and its nested sub-commands. The types are pure
//! declarative data. Fields such as `default`, `choices`, `required`,
//! `hidden` and `conflicts` are carried for callers and are never acted on
//! by the tokenizer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Scalar value vocabulary shared by options and positionals.
///
/// # Examples
///
/// ```
/// use command_tokenizer_core::ValueKind;
///
/// assert!(ValueKind::File.is_path_like());
/// assert!(!ValueKind::Number.is_path_like());
/// assert_eq!("dir".parse::<ValueKind>().unwrap(), ValueKind::Dir);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Free-form string (the default).
    #[default]
    String,
    /// Numeric value.
    Number,
    /// File path.
    File,
    /// Directory path.
    Dir,
}

impl ValueKind {
    /// Returns `true` for kinds a shell should complete from the filesystem.
    pub fn is_path_like(self) -> bool {
        matches!(self, Self::File | Self::Dir)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::File => "file",
            Self::Dir => "dir",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "file" => Ok(Self::File),
            "dir" => Ok(Self::Dir),
            other => Err(SchemaError::InvalidKind(other.to_string())),
        }
    }
}

/// Kind of an option definition.
///
/// Flag-like kinds ([`Flag`](OptionKind::Flag), [`Count`](OptionKind::Count))
/// never consume a following token. [`Single`](OptionKind::Single) and
/// [`List`](OptionKind::List) kinds take a value; list kinds may repeat.
///
/// Serialized as a plain string: `flag`, `count`, `string`, `number`,
/// `file`, `dir`, or one of the scalar names with a `-list` suffix.
///
/// # Examples
///
/// ```
/// use command_tokenizer_core::{OptionKind, ValueKind};
///
/// let kind: OptionKind = "file-list".parse().unwrap();
/// assert_eq!(kind, OptionKind::List(ValueKind::File));
/// assert!(kind.takes_value());
/// assert!(kind.is_plural());
/// assert_eq!(kind.to_string(), "file-list");
///
/// assert!(OptionKind::Count.is_flag_like());
/// assert_eq!(OptionKind::Flag.value_kind(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OptionKind {
    /// Boolean switch with an automatic `no-` negated form.
    Flag,
    /// Repeatable switch counted by the caller (`-vvv`).
    Count,
    /// Takes exactly one value.
    Single(ValueKind),
    /// Takes a value and may be repeated.
    List(ValueKind),
}

impl OptionKind {
    /// Returns `true` for [`Flag`](Self::Flag) and [`Count`](Self::Count).
    pub fn is_flag_like(self) -> bool {
        matches!(self, Self::Flag | Self::Count)
    }

    /// Returns `true` if the option consumes a value.
    pub fn takes_value(self) -> bool {
        !self.is_flag_like()
    }

    /// Returns `true` for list kinds.
    pub fn is_plural(self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the scalar kind of the value, if the option takes one.
    pub fn value_kind(self) -> Option<ValueKind> {
        match self {
            Self::Single(kind) | Self::List(kind) => Some(kind),
            Self::Flag | Self::Count => None,
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => f.write_str("flag"),
            Self::Count => f.write_str("count"),
            Self::Single(kind) => write!(f, "{kind}"),
            Self::List(kind) => write!(f, "{kind}-list"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flag" => Ok(Self::Flag),
            "count" => Ok(Self::Count),
            _ => match s.strip_suffix("-list") {
                Some(scalar) => scalar
                    .parse()
                    .map(Self::List)
                    .map_err(|_| SchemaError::InvalidKind(s.to_string())),
                None => s.parse().map(Self::Single),
            },
        }
    }
}

impl TryFrom<String> for OptionKind {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionKind> for String {
    fn from(kind: OptionKind) -> Self {
        kind.to_string()
    }
}

/// Definition of a named option.
///
/// The map key in [`Command::options`] is the primary name; `aliases` adds
/// further names. Names of one character are invoked as `-x`, longer names
/// as `--name`.
///
/// # Examples
///
/// ```
/// use command_tokenizer_core::{OptionDef, OptionKind, ValueKind};
///
/// let output = OptionDef::value(ValueKind::File)
///     .with_alias("o")
///     .with_description("Write output to FILE");
/// assert_eq!(output.kind, OptionKind::Single(ValueKind::File));
/// assert_eq!(output.aliases, vec!["o".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDef {
    /// What the option accepts.
    pub kind: OptionKind,
    /// Additional invocation names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hidden from help output.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    /// Primary names of options this one is mutually exclusive with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
    /// Must be supplied by the user.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Value applied by the caller when the option is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Accepted values, checked by the caller.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl OptionDef {
    /// Creates an option of the given kind with no metadata.
    pub fn new(kind: OptionKind) -> Self {
        Self {
            kind,
            aliases: Vec::new(),
            description: None,
            hidden: false,
            conflicts: Vec::new(),
            required: false,
            default: None,
            choices: Vec::new(),
        }
    }

    /// Creates a boolean flag.
    pub fn flag() -> Self {
        Self::new(OptionKind::Flag)
    }

    /// Creates a counting flag.
    pub fn count() -> Self {
        Self::new(OptionKind::Count)
    }

    /// Creates a single-valued option.
    pub fn value(kind: ValueKind) -> Self {
        Self::new(OptionKind::Single(kind))
    }

    /// Creates a repeatable valued option.
    pub fn list(kind: ValueKind) -> Self {
        Self::new(OptionKind::List(kind))
    }

    /// Adds an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Marks the option as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Definition of a positional argument.
///
/// # Examples
///
/// ```
/// use command_tokenizer_core::{PositionalDef, ValueKind};
///
/// let sources = PositionalDef::new("source", ValueKind::File).allow_multiple();
/// assert_eq!(sources.name(), "source");
/// assert!(sources.multiple);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionalDef {
    /// Accepted names; the first is used for display.
    pub names: Vec<String>,
    /// Scalar kind of each value.
    #[serde(default)]
    pub kind: ValueKind,
    /// Accepts more than one value.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiple: bool,
    /// Must be supplied by the user.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PositionalDef {
    /// Creates a single positional with one name.
    pub fn new(name: &str, kind: ValueKind) -> Self {
        Self {
            names: vec![name.to_string()],
            kind,
            multiple: false,
            required: false,
            description: None,
        }
    }

    /// Marks as accepting multiple values.
    pub fn allow_multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("arg")
    }
}

/// A node of the command tree.
///
/// # Examples
///
/// ```
/// use command_tokenizer_core::*;
///
/// let schema = Command::new()
///     .with_option("verbose", OptionDef::flag().with_alias("v"))
///     .with_command(
///         "run",
///         Command::new()
///             .with_option("port", OptionDef::value(ValueKind::Number))
///             .with_positional(PositionalDef::new("script", ValueKind::File)),
///     );
///
/// assert!(schema.find_command("run").is_some());
/// assert_eq!(schema.command_names(), vec!["run"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Positional arguments, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positionals: Vec<PositionalDef>,
    /// Options keyed by primary name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, OptionDef>,
    /// Sub-commands keyed by invocation name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, Command>,
}

impl Command {
    /// Creates an empty command node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds an option under its primary name.
    pub fn with_option(mut self, name: &str, option: OptionDef) -> Self {
        self.options.insert(name.to_string(), option);
        self
    }

    /// Appends a positional argument.
    pub fn with_positional(mut self, positional: PositionalDef) -> Self {
        self.positionals.push(positional);
        self
    }

    /// Adds a sub-command.
    pub fn with_command(mut self, name: &str, command: Command) -> Self {
        self.commands.insert(name.to_string(), command);
        self
    }

    /// Finds a direct sub-command by invocation name.
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Gets all direct sub-command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Parses a command tree from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] on malformed input.
    pub fn from_json_str(input: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a command tree from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Yaml`] on malformed input.
    pub fn from_yaml_str(input: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}
